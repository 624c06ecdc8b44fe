//! Arena settings: round cadence and default monster color.
//!
//! Loaded from a YAML (or JSON) file, then overridden by environment variables.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "MONSTER_ARENA_CONFIG";
pub const TICK_MS_VAR: &str = "MONSTER_ARENA_TICK_MS";

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_COLOR: &str = "gray";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value '{value}' for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub tick_interval_ms: u64,
    pub default_color: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl ArenaConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Defaults, then the file named by `MONSTER_ARENA_CONFIG`, then `MONSTER_ARENA_TICK_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim())?,
            _ => Self::default(),
        };
        if let Ok(raw) = std::env::var(TICK_MS_VAR) {
            config.tick_interval_ms = parse_tick_ms(&raw)?;
        }
        Ok(config)
    }

    /// Time between rounds. Never zero.
    pub fn cadence(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

fn parse_tick_ms(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnv {
            var: TICK_MS_VAR,
            value: raw.to_string(),
        })
}
