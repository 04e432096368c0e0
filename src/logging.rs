//! Diagnostic logging setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tracing subscriber.
///
/// Diagnostics go to stderr so they never mix with report output. The level
/// comes from `RUST_LOG` when set and defaults to `warn`, which keeps
/// skipped-source reports visible without per-line noise.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
