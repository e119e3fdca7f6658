// textveil/src/logger.rs
//! Logger initialization for the textveil CLI.
//!
//! Wraps `env_logger` so that repeated initialization attempts (the CLI and
//! its integration tests share this path) are harmless.

use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once. An explicit `level` overrides the
/// `RUST_LOG` environment variable; `None` leaves the environment in charge.
pub fn init_logger(level: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = Builder::from_default_env();
        if let Some(level) = level {
            builder.filter_level(level);
        }
        let _ = builder.format_timestamp(None).try_init();
    });
}
