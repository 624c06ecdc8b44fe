//! Session roster of registered monsters and the two-slot battle selection.

use serde::Serialize;

use crate::config::ArenaConfig;
use crate::data::monster::{Monster, MonsterFields, MonsterId, MonsterIdGenerator};

pub const MAX_SELECTED: usize = 2;

/// Append-only list of monsters in registration order. Every entry carries an
/// id no other entry has.
#[derive(Debug, Default, Serialize)]
pub struct Roster {
    monsters: Vec<Monster>,
    #[serde(skip)]
    ids: MonsterIdGenerator,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a monster. A monster whose id is already taken is given a fresh
    /// one, so equal values still end up as separate selectable entries.
    pub fn add(&mut self, mut monster: Monster) -> &Monster {
        while self.get(monster.id).is_some() {
            let previous = monster.id;
            monster.id = self.ids.next_id();
            tracing::debug!(previous, id = monster.id, "duplicate monster id reassigned");
        }
        self.monsters.push(monster);
        &self.monsters[self.monsters.len() - 1]
    }

    /// Build a monster from raw form fields, give it a fresh id and append it.
    pub fn submit(&mut self, fields: MonsterFields, config: &ArenaConfig) -> &Monster {
        let monster = fields.into_monster(self.ids.next_id(), config);
        tracing::debug!(id = monster.id, name = %monster.name, "monster registered");
        self.add(monster)
    }

    pub fn get(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter()
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

/// Up to two selected monster ids, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    ids: Vec<MonsterId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deselect if selected, select if a slot is free, otherwise leave unchanged.
    pub fn toggle(&mut self, id: MonsterId) -> &Self {
        if let Some(pos) = self.ids.iter().position(|&s| s == id) {
            self.ids.remove(pos);
        } else if self.ids.len() < MAX_SELECTED {
            self.ids.push(id);
        }
        self
    }

    pub fn is_selected(&self, id: MonsterId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[MonsterId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn pair(&self) -> Option<(MonsterId, MonsterId)> {
        match self.ids.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }
}
