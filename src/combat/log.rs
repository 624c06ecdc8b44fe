use std::fmt;

use serde::Serialize;

use crate::data::monster::MonsterId;

/// One line of the battle log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogEntry {
    Attack {
        round: u32,
        attacker_id: MonsterId,
        attacker: String,
        defender_id: MonsterId,
        defender: String,
        damage: i64,
    },
    Victory {
        winner_id: MonsterId,
        winner: String,
    },
    Draw,
}

impl LogEntry {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Attack { .. })
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack {
                attacker,
                defender,
                damage,
                ..
            } => write!(f, "{attacker} attacked {defender} dealing {damage} damage"),
            Self::Victory { winner, .. } => write!(f, "{winner} wins!"),
            Self::Draw => write!(f, "The battle ended in a draw!"),
        }
    }
}
