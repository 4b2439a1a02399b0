//! Tracing/logging setup shared by binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing with the default `info` filter.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with_default("info");
}

/// Initialize tracing with a caller-supplied fallback filter.
///
/// `RUST_LOG` still takes precedence when set.
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
