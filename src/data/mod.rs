pub mod monster;
pub mod palette;
pub mod roster;

pub use monster::{coerce_stat, Monster, MonsterFields, MonsterId, MonsterIdGenerator};
pub use roster::{Roster, Selection, MAX_SELECTED};
