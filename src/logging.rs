//! Tracing subscriber setup for binaries and tests that embed the engine.

use tracing_subscriber::{fmt, EnvFilter};

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the tracing subscriber with env-based filtering.
///
/// Reads `RUST_LOG` (or `LOG_LEVEL`) to set the filter.
/// Defaults to `default_level` if neither is set. Safe to call more than
/// once; later calls are no-ops.
pub fn init_tracing(default_level: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .try_init();
}

/// Same as [`init_tracing`] but emits one JSON object per event.
pub fn init_tracing_json(default_level: &str) {
    let _ = fmt()
        .json()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .try_init();
}
