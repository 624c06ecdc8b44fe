pub mod clock;

pub use clock::{spawn_battle, BattleHandle, ClockError};
