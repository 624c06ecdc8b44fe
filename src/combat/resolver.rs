//! Battle state machine: idle -> in progress -> resolved.
//!
//! The resolver owns the fighter pair and the log. Each call to
//! [BattleResolver::advance] plays exactly one round; nothing happens between calls.

use serde::Serialize;

use crate::combat::engine::{play_round, Attack, Fighter, Resolution, TurnOrder};
use crate::combat::log::LogEntry;
use crate::combat::snapshot::BattleSnapshot;
use crate::data::monster::{Monster, MonsterId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Win(MonsterId),
    Draw,
}

impl Outcome {
    pub fn is_resolved(self) -> bool {
        self != Self::InProgress
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub round: u32,
    pub order: TurnOrder,
    pub attacks: Vec<Attack>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
struct Battle {
    fighters: [Fighter; 2],
    log: Vec<LogEntry>,
    outcome: Outcome,
    round: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BattleResolver {
    battle: Option<Battle>,
}

impl BattleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh battle. `a` keeps the first move on a full stat tie.
    pub fn start(&mut self, a: Monster, b: Monster) {
        tracing::info!(
            first = %a.name,
            first_id = a.id,
            second = %b.name,
            second_id = b.id,
            "battle started"
        );
        self.battle = Some(Battle {
            fighters: [Fighter::new(a), Fighter::new(b)],
            log: Vec::new(),
            outcome: Outcome::InProgress,
            round: 0,
        });
    }

    /// Play one round. Returns `None` when no battle is loaded or it is already resolved.
    pub fn advance(&mut self) -> Option<RoundReport> {
        let battle = self.battle.as_mut()?;
        if battle.outcome.is_resolved() {
            return None;
        }

        battle.round += 1;
        let round = battle.round;
        let result = play_round(battle.fighters.clone());
        battle.fighters = result.fighters;

        let TurnOrder { first, second } = result.order;
        let sides = [(first, second), (second, first)];
        for (attack, (atk, def)) in result.attacks.iter().zip(sides) {
            battle.log.push(LogEntry::Attack {
                round,
                attacker_id: attack.attacker,
                attacker: battle.fighters[atk].monster.name.clone(),
                defender_id: attack.defender,
                defender: battle.fighters[def].monster.name.clone(),
                damage: attack.damage,
            });
        }

        let first = &battle.fighters[first].monster;
        let second = &battle.fighters[second].monster;
        battle.outcome = match result.resolution {
            None => Outcome::InProgress,
            Some(Resolution::Draw) => {
                battle.log.push(LogEntry::Draw);
                Outcome::Draw
            }
            Some(Resolution::FirstWins) => {
                battle.log.push(LogEntry::Victory {
                    winner_id: first.id,
                    winner: first.name.clone(),
                });
                Outcome::Win(first.id)
            }
            Some(Resolution::SecondWins) => {
                battle.log.push(LogEntry::Victory {
                    winner_id: second.id,
                    winner: second.name.clone(),
                });
                Outcome::Win(second.id)
            }
        };

        tracing::debug!(
            round,
            first_hp = battle.fighters[0].current_hp,
            second_hp = battle.fighters[1].current_hp,
            "round played"
        );
        if let Some(entry) = battle.log.last().filter(|entry| entry.is_terminal()) {
            tracing::info!(round, outcome = ?battle.outcome, %entry, "battle resolved");
        }

        Some(RoundReport {
            round,
            order: result.order,
            attacks: result.attacks,
            outcome: battle.outcome,
        })
    }

    /// Play rounds until resolved. Returns how many rounds this call played.
    pub fn run_to_end(&mut self) -> u32 {
        let mut played = 0;
        while self.advance().is_some() {
            played += 1;
        }
        played
    }

    /// Drop the current battle, log and outcome.
    pub fn reset(&mut self) {
        if self.battle.take().is_some() {
            tracing::info!("battle reset");
        }
    }

    /// `None` before a battle starts.
    pub fn outcome(&self) -> Option<Outcome> {
        self.battle.as_ref().map(|b| b.outcome)
    }

    pub fn is_idle(&self) -> bool {
        self.battle.is_none()
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome().is_some_and(Outcome::is_resolved)
    }

    pub fn fighters(&self) -> Option<&[Fighter; 2]> {
        self.battle.as_ref().map(|b| &b.fighters)
    }

    pub fn log(&self) -> &[LogEntry] {
        self.battle.as_ref().map(|b| b.log.as_slice()).unwrap_or(&[])
    }

    pub fn round(&self) -> u32 {
        self.battle.as_ref().map_or(0, |b| b.round)
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot::capture(self.round(), self.fighters(), self.log(), self.outcome())
    }
}
