pub mod engine;
pub mod log;
pub mod resolver;
pub mod snapshot;

pub use engine::{
    classify, damage, play_round, round_bound, turn_order, Attack, Fighter, Resolution,
    RoundResult, TurnOrder, MIN_DAMAGE,
};
pub use log::LogEntry;
pub use resolver::{BattleResolver, Outcome, RoundReport};
pub use snapshot::{BattleSnapshot, FighterStatus, FighterView};
