//! Tracing subscriber initialisation.

use crate::config::Config;
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors returned while installing the global subscriber.
#[derive(Debug, Clone, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(Arc<dyn std::error::Error + Send + Sync>),

    /// A global subscriber has already been installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(Arc<dyn std::error::Error + Send + Sync>),
}

/// Installs a formatted tracing subscriber for the process.
///
/// `RUST_LOG` takes precedence; otherwise the configured log threshold is
/// used.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber has
/// already been installed.
pub fn init_tracing(config: &Config) -> Result<(), TelemetryError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV)
        .unwrap_or_else(|_| config.log_threshold().as_str().to_owned());
    let filter = EnvFilter::try_new(directives)
        .map_err(|err| TelemetryError::InvalidFilter(Arc::new(err)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_level(true))
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInstalled(Arc::new(err)))
}
