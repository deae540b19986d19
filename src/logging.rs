//! Tracing subscriber setup for diagnostics.
//!
//! Diagnostics go to stderr so they never mix with the prompts and results
//! printed on stdout.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

/// Builds the event filter, preferring `RUST_LOG` over the configured level.
///
/// Falls back to `warn` when the configured directive does not parse.
#[must_use]
pub fn env_filter(configured_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured_level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL))
}

/// Installs a compact stderr subscriber as the global default.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already installed.
pub fn init(configured_level: &str) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter(configured_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init()
}
