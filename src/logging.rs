//! Stderr logging via `tracing-subscriber`.
//!
//! `RUST_LOG` wins when set. Otherwise the level is `info`, or `debug` for this
//! crate when `MONSTER_ARENA_DEBUG` is set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEBUG_VAR: &str = "MONSTER_ARENA_DEBUG";

pub fn init() {
    let debug_logging = std::env::var(DEBUG_VAR).is_ok();
    let default_directive = if debug_logging {
        "info,monster_arena=debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    // A second init (tests, embedding) keeps the first subscriber.
    if tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .try_init()
        .is_ok()
    {
        tracing::debug!(debug_logging, "logging initialized");
    }
}
