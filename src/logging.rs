//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{HealthyAiError, Result};
use crate::system::System;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable whose directives take precedence over the configured level
pub const RUST_LOG_ENV: &str = "RUST_LOG";

/// Build the event filter for `config`
///
/// A parseable `RUST_LOG` wins; otherwise the configured level is used.
///
/// # Errors
///
/// Returns a configuration error if `RUST_LOG` is unusable and the configured
/// level is not a valid filter
pub fn env_filter(system: &dyn System, config: &LoggingConfig) -> Result<EnvFilter> {
    if let Some(filter) = system
        .env_var(RUST_LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return Ok(filter);
    }

    EnvFilter::try_new(config.level.trim()).map_err(|e| {
        HealthyAiError::configuration(format!("Invalid logging level '{}': {e}", config.level))
    })
}

/// Install the global tracing subscriber described by `config`
///
/// # Errors
///
/// Returns a configuration error if no usable filter can be built or a
/// global subscriber is already installed
pub fn init(system: &dyn System, config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(system, config)?;

    let builder = fmt()
        .with_target(config.with_target)
        .with_env_filter(filter);

    let installed = match config.format {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| {
        HealthyAiError::configuration(format!("Failed to install tracing subscriber: {e}"))
    })
}
