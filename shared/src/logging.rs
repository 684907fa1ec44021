//! Tracing setup for the command-line scripts.

use tracing_subscriber::EnvFilter;

/// Install a compact stderr subscriber so stdout carries only the report.
///
/// Defaults to `info` when `RUST_LOG` is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
