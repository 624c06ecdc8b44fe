//! Read-only view of a battle handed to presentation after every tick.

use serde::Serialize;

use crate::combat::engine::Fighter;
use crate::combat::log::LogEntry;
use crate::combat::resolver::Outcome;
use crate::data::monster::MonsterId;
use crate::data::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FighterStatus {
    Alive,
    Defeated,
    Winner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FighterView {
    pub id: MonsterId,
    pub name: String,
    pub current_hp: i64,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub color: String,
    pub status: FighterStatus,
}

impl FighterView {
    fn from_fighter(fighter: &Fighter, outcome: Option<Outcome>) -> Self {
        let monster = &fighter.monster;
        let status = if outcome == Some(Outcome::Win(monster.id)) {
            FighterStatus::Winner
        } else if fighter.is_down() {
            FighterStatus::Defeated
        } else {
            FighterStatus::Alive
        };
        Self {
            id: monster.id,
            name: monster.name.clone(),
            current_hp: fighter.current_hp,
            max_hp: monster.hp,
            attack: monster.attack,
            defense: monster.defense,
            speed: monster.speed,
            color: palette::resolve(&monster.color),
            status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BattleSnapshot {
    pub round: u32,
    pub fighters: Option<[FighterView; 2]>,
    pub log: Vec<String>,
    pub outcome: Option<Outcome>,
}

impl BattleSnapshot {
    pub fn capture(
        round: u32,
        fighters: Option<&[Fighter; 2]>,
        log: &[LogEntry],
        outcome: Option<Outcome>,
    ) -> Self {
        Self {
            round,
            fighters: fighters.map(|[a, b]| {
                [
                    FighterView::from_fighter(a, outcome),
                    FighterView::from_fighter(b, outcome),
                ]
            }),
            log: log.iter().map(ToString::to_string).collect(),
            outcome,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some_and(Outcome::is_resolved)
    }

    /// Name of the winner, if the battle ended with one.
    pub fn winner(&self) -> Option<&str> {
        let Some(Outcome::Win(id)) = self.outcome else {
            return None;
        };
        self.fighters
            .as_ref()?
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.name.as_str())
    }
}
