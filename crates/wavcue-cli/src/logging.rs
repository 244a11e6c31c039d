//! Diagnostic output setup.
//!
//! The codec reports skipped and truncated chunks through the `log` facade.
//! This installs a `tracing-subscriber` formatter on stderr that also picks up
//! those records.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count. Zero defers to `RUST_LOG`.
pub fn level_for(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = match level_for(verbosity) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
