//! Round arithmetic for one-on-one monster battles.
//!
//! Everything here is pure: the fighter pair goes in, the updated pair and what
//! happened come out. [crate::combat::BattleResolver] owns the pair between rounds.

use serde::Serialize;

use crate::data::monster::{Monster, MonsterId};

/// Damage dealt by any attack is at least this much.
pub const MIN_DAMAGE: i64 = 1;

/// A monster and its hit points in the current battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fighter {
    pub monster: Monster,
    pub current_hp: i64,
}

impl Fighter {
    pub fn new(monster: Monster) -> Self {
        let current_hp = i64::from(monster.hp);
        Self {
            monster,
            current_hp,
        }
    }

    pub fn is_down(&self) -> bool {
        self.current_hp <= 0
    }
}

/// Indices into the fighter pair: `0` is the first monster passed to `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnOrder {
    pub first: usize,
    pub second: usize,
}

/// Higher speed moves first, then higher attack. A full tie keeps `a` first.
pub fn turn_order(a: &Monster, b: &Monster) -> TurnOrder {
    let b_first = b.speed > a.speed || (b.speed == a.speed && b.attack > a.attack);
    if b_first {
        TurnOrder {
            first: 1,
            second: 0,
        }
    } else {
        TurnOrder {
            first: 0,
            second: 1,
        }
    }
}

pub fn damage(attacker: &Monster, defender: &Monster) -> i64 {
    (i64::from(attacker.attack) - i64::from(defender.defense)).max(MIN_DAMAGE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attack {
    pub attacker: MonsterId,
    pub defender: MonsterId,
    pub damage: i64,
    pub defender_hp: i64,
}

/// Terminal classification of a round, relative to that round's movers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Resolution {
    FirstWins,
    SecondWins,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub fighters: [Fighter; 2],
    pub order: TurnOrder,
    pub attacks: Vec<Attack>,
    pub resolution: Option<Resolution>,
}

fn strike(fighters: &mut [Fighter; 2], attacker: usize, defender: usize) -> Attack {
    let dealt = damage(&fighters[attacker].monster, &fighters[defender].monster);
    let target = &mut fighters[defender];
    target.current_hp = target.current_hp.saturating_sub(dealt);
    Attack {
        attacker: fighters[attacker].monster.id,
        defender: fighters[defender].monster.id,
        damage: dealt,
        defender_hp: fighters[defender].current_hp,
    }
}

/// Check order matters: a double knockout is a draw before either side can win.
pub fn classify(first: &Fighter, second: &Fighter) -> Option<Resolution> {
    match (first.is_down(), second.is_down()) {
        (true, true) => Some(Resolution::Draw),
        (true, false) => Some(Resolution::SecondWins),
        (false, true) => Some(Resolution::FirstWins),
        (false, false) => None,
    }
}

/// Play one round. The second mover only strikes back if it survives.
pub fn play_round(mut fighters: [Fighter; 2]) -> RoundResult {
    let order = turn_order(&fighters[0].monster, &fighters[1].monster);
    let mut attacks = Vec::with_capacity(2);

    attacks.push(strike(&mut fighters, order.first, order.second));
    if !fighters[order.second].is_down() {
        attacks.push(strike(&mut fighters, order.second, order.first));
    }

    let resolution = classify(&fighters[order.first], &fighters[order.second]);
    RoundResult {
        fighters,
        order,
        attacks,
        resolution,
    }
}

/// Upper bound on rounds for a battle where both sides start with hp >= 1.
pub fn round_bound(a: &Monster, b: &Monster) -> u64 {
    let to_kill_a = u64::from(a.hp).div_ceil(damage(b, a).unsigned_abs());
    let to_kill_b = u64::from(b.hp).div_ceil(damage(a, b).unsigned_abs());
    to_kill_a + to_kill_b + 1
}
