//! Session controller: the roster, the current selection and the one battle resolver.
//!
//! A timed battle moves the resolver into a clock task. The arena keeps the
//! [BattleHandle] for that task, so resetting or starting over through the
//! arena always cancels the pending tick first.

use thiserror::Error;

use crate::combat::{BattleResolver, BattleSnapshot, RoundReport};
use crate::config::ArenaConfig;
use crate::data::monster::{Monster, MonsterFields, MonsterId};
use crate::data::roster::{Roster, Selection};
use crate::runtime::{spawn_battle, BattleHandle, ClockError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    #[error("pick exactly two monsters to battle ({selected} selected)")]
    IncompleteSelection { selected: usize },

    #[error("monster {0} is not in the roster")]
    UnknownMonster(MonsterId),
}

#[derive(Debug, Default)]
pub struct Arena {
    config: ArenaConfig,
    roster: Roster,
    selection: Selection,
    resolver: BattleResolver,
    clock: Option<BattleHandle>,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn submit(&mut self, fields: MonsterFields) -> &Monster {
        self.roster.submit(fields, &self.config)
    }

    pub fn add(&mut self, monster: Monster) -> &Monster {
        self.roster.add(monster)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Toggle a monster in or out of the selection. Ids not in the roster are ignored.
    pub fn toggle(&mut self, id: MonsterId) -> &Selection {
        if self.roster.get(id).is_some() {
            self.selection.toggle(id);
        }
        &self.selection
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Two monsters picked, no battle on screen and no clock running.
    pub fn can_start(&self) -> bool {
        self.selection.pair().is_some() && self.clock.is_none() && self.resolver.is_idle()
    }

    /// The selected pair in selection order, cloned out of the roster.
    pub fn matchup(&self) -> Result<(Monster, Monster), ArenaError> {
        let (a, b) = self
            .selection
            .pair()
            .ok_or(ArenaError::IncompleteSelection {
                selected: self.selection.len(),
            })?;
        let lookup = |id| {
            self.roster
                .get(id)
                .cloned()
                .ok_or(ArenaError::UnknownMonster(id))
        };
        Ok((lookup(a)?, lookup(b)?))
    }

    /// Start a battle between the selected monsters, replacing any previous one.
    pub fn start_selected(&mut self) -> Result<BattleSnapshot, ArenaError> {
        let (a, b) = self.matchup()?;
        self.clock = None;
        self.resolver.start(a, b);
        Ok(self.resolver.snapshot())
    }

    /// Start the selected battle on a clock task playing one round per
    /// configured cadence. Must be called from inside a tokio runtime.
    pub fn start_timed(&mut self) -> Result<BattleSnapshot, ArenaError> {
        let snapshot = self.start_selected()?;
        let resolver = std::mem::take(&mut self.resolver);
        self.clock = Some(spawn_battle(resolver, self.config.cadence()));
        Ok(snapshot)
    }

    /// The running clock, if a timed battle is in progress.
    pub fn clock(&self) -> Option<&BattleHandle> {
        self.clock.as_ref()
    }

    /// Wait for a timed battle to resolve and take its resolver back.
    pub async fn finish_timed(&mut self) -> Result<BattleSnapshot, ClockError> {
        if let Some(clock) = self.clock.take() {
            self.resolver = clock.finished().await?;
        }
        Ok(self.resolver.snapshot())
    }

    /// Only steps a battle the arena holds itself; a timed battle advances on its clock.
    pub fn advance(&mut self) -> Option<RoundReport> {
        self.resolver.advance()
    }

    /// Back to the pre-battle state. A running clock is aborted.
    pub fn reset_battle(&mut self) {
        self.clock = None;
        self.resolver.reset();
    }

    /// Back to the pre-battle state, waiting for a running clock to exit first.
    pub async fn reset_timed(&mut self) -> Result<(), ClockError> {
        if let Some(clock) = self.clock.take() {
            clock.reset().await?;
        }
        self.resolver.reset();
        Ok(())
    }

    pub fn resolver(&self) -> &BattleResolver {
        &self.resolver
    }

    /// Current battle state, read from the clock while one is running.
    pub fn snapshot(&self) -> BattleSnapshot {
        match &self.clock {
            Some(clock) => clock.snapshot(),
            None => self.resolver.snapshot(),
        }
    }
}
