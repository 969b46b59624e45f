//! Diagnostic tracing for the kata CLI.
//!
//! Library code reports degraded reads and writes through `tracing::warn!`;
//! this module decides where those events go. Command output (records,
//! merged intervals, counts) is printed on stdout and is unaffected by
//! `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset, so record repairs
/// and skipped files are visible without extra flags.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=kata=debug kata records show data/persons.csv
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
