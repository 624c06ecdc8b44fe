//! Monster registration and auto-resolving one-on-one battles.
//!
//! [combat] holds the round rules and the battle state machine, [data] the
//! monster records, roster and palette, [runtime] the timer that plays a battle
//! at a fixed cadence, and [arena] the session controller tying them together.

pub mod arena;
pub mod cli;
pub mod combat;
pub mod config;
pub mod data;
pub mod logging;
pub mod runtime;

pub use arena::{Arena, ArenaError};
pub use combat::{BattleResolver, BattleSnapshot, Outcome};
pub use config::ArenaConfig;
pub use data::{Monster, MonsterFields, MonsterId};
