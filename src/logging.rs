//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

use crate::constants;

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects between the default
/// and debug filters.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        constants::VERBOSE_LOG_FILTER
    } else {
        constants::DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
