//! Tracing subscriber setup for binaries.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the process entry point.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable consulted for the log filter.
pub const LOG_FILTER_ENV: &str = "JETCARE_LOG";

/// Installs a formatted subscriber filtered by [`LOG_FILTER_ENV`].
///
/// Falls back to the `info` level when the variable is unset or invalid.
///
/// # Errors
///
/// Returns an error when a global subscriber has already been installed.
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(filter)
        .try_init()
}
