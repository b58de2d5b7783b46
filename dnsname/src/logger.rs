// dnsname/src/logger.rs
//! Logger setup for the dnsname binary.
//!
//! Logs always go to stderr so that sanitized names on stdout can be piped safely.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialises `env_logger`.
///
/// With `Some(level)` the level is forced; with `None`, `RUST_LOG` decides and
/// defaults to `warn`. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format_timestamp(None);

    if let Some(level) = level {
        builder.filter_level(level);
    }

    // A second init (e.g. from tests) is not an error worth reporting.
    let _ = builder.try_init();
}
