//! Configuration validation logic

use crate::config::{EngineConfig, LOG_FORMAT_ENV, LOG_LEVEL_ENV, LogFormat};
use crate::error::{HealthyAiError, Result};
use crate::system::System;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Plain level names accepted without further parsing
pub const LEVEL_NAMES: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validate a complete configuration
///
/// # Errors
///
/// Returns a configuration error if the logging level is empty or is
/// neither a level name nor a valid filter directive
#[inline]
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    validate_log_level(&config.logging.level)
}

/// Validate a logging level or filter directive
///
/// # Errors
///
/// Returns a configuration error if the value cannot be used as a filter or
/// contains a bare word that is not a level name
#[inline]
pub fn validate_log_level(level: &str) -> Result<()> {
    let trimmed = level.trim();
    if trimmed.is_empty() {
        return Err(HealthyAiError::configuration(
            "Logging level cannot be empty",
        ));
    }

    if is_level_name(trimmed) {
        return Ok(());
    }

    // A bare word would silently become a target filter
    for directive in trimmed.split(',').map(str::trim) {
        let bare = !directive.contains(['=', '[', ':', '_']);
        if bare && !directive.is_empty() && !is_level_name(directive) {
            return Err(HealthyAiError::configuration(format!(
                "Unknown logging level '{directive}'. Use one of {} or a 'target=level' directive",
                LEVEL_NAMES.join(", ")
            )));
        }
    }

    EnvFilter::try_new(trimmed).map(|_| ()).map_err(|e| {
        HealthyAiError::configuration(format!("Invalid logging level '{level}': {e}"))
    })
}

fn is_level_name(value: &str) -> bool {
    LEVEL_NAMES.contains(&value.to_lowercase().as_str())
}

/// Apply `HEALTHY_AI_ENGINE_LOG*` overrides on top of a loaded configuration
///
/// # Errors
///
/// Returns a configuration error if the format override is not a known format
pub fn apply_env_overrides(system: &dyn System, config: &mut EngineConfig) -> Result<()> {
    if let Ok(level) = system.env_var(LOG_LEVEL_ENV) {
        debug!("Overriding logging level from {LOG_LEVEL_ENV}: {level}");
        config.logging.level = level;
    }

    if let Ok(format) = system.env_var(LOG_FORMAT_ENV) {
        config.logging.format = format.parse::<LogFormat>().inspect_err(|e| {
            warn!("Rejected {LOG_FORMAT_ENV} override: {e}");
        })?;
    }

    Ok(())
}
