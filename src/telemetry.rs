//! Opt-in tracing subscriber for applications and tests using komposti.

use komposti_core::{Config, Error, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global subscriber with an environment filter.
///
/// `RUST_LOG` wins when set and valid; otherwise the configured
/// [`LogLevel`](komposti_core::LogLevel) is used.
///
/// # Errors
///
/// Returns `Error::TelemetryInit` if a global subscriber is already set.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| Error::telemetry_init(e.to_string()))
}
