//! Tracing subscriber installation.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "corkboard=info,tower_http=info";

/// Error returned when a global subscriber is already installed.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TelemetryError(String);

/// Installs a formatting subscriber filtered by `RUST_LOG`.
///
/// # Errors
///
/// Returns [`TelemetryError`] when a global subscriber is already set.
pub fn init() -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| TelemetryError(err.to_string()))
}
