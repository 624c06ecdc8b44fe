//! Monster records and the raw form input they are built from.
//!
//! Numeric form fields go through [coerce_stat]: integer-prefix parsing, 0 for
//! empty or non-numeric input, negatives clamped to 0, overflow saturated.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;

pub type MonsterId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub hp: u32,
    pub color: String,
    #[serde(default)]
    pub image_url: String,
}

/// Raw text fields as submitted by a form (or the CLI).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterFields {
    pub name: String,
    pub attack: String,
    pub defense: String,
    pub speed: String,
    pub hp: String,
    pub color: String,
    pub image_url: String,
}

impl MonsterFields {
    /// Parse `name:attack:defense:speed:hp[:color]`. Missing trailing fields stay empty.
    pub fn from_compact(raw: &str) -> Self {
        let mut parts = raw.splitn(6, ':');
        let mut next = || parts.next().unwrap_or("").to_string();
        Self {
            name: next(),
            attack: next(),
            defense: next(),
            speed: next(),
            hp: next(),
            color: next(),
            image_url: String::new(),
        }
    }

    pub fn into_monster(self, id: MonsterId, config: &ArenaConfig) -> Monster {
        let color = if self.color.trim().is_empty() {
            config.default_color.clone()
        } else {
            self.color.trim().to_string()
        };
        Monster {
            id,
            name: self.name,
            attack: coerce_stat(&self.attack),
            defense: coerce_stat(&self.defense),
            speed: coerce_stat(&self.speed),
            hp: coerce_stat(&self.hp),
            color,
            image_url: self.image_url,
        }
    }
}

/// Coerce a raw numeric field into a non-negative stat.
///
/// Negative input is clamped to 0 on purpose rather than kept as typed, so
/// every stat stays at or above zero.
pub fn coerce_stat(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let prefix_len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if prefix_len == 0 || negative {
        return 0;
    }
    digits[..prefix_len].parse::<u32>().unwrap_or(u32::MAX)
}

/// Hands out creation-time ids: milliseconds since the epoch, bumped so that
/// two monsters created within the same millisecond still differ.
#[derive(Debug, Default)]
pub struct MonsterIdGenerator {
    last: AtomicU64,
}

impl MonsterIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> MonsterId {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }
}
