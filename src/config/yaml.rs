//! YAML configuration loading and parsing

use crate::config::EngineConfig;
use crate::config::validation::{apply_env_overrides, validate_config};
use crate::error::{HealthyAiError, Result};
use crate::system::System;
use std::path::Path;
use tracing::debug;

/// Load and parse YAML configuration from file
///
/// # Errors
///
/// Returns a configuration error if:
/// - The file does not exist or cannot be read
/// - The YAML is malformed or contains unknown keys
/// - An environment override or a resulting value is invalid
pub fn load_config(system: &dyn System, path: &str) -> Result<EngineConfig> {
    let path_obj = Path::new(path);

    if !system.exists(path_obj) {
        return Err(HealthyAiError::configuration(format!(
            "Configuration file not found: {path}"
        )));
    }

    let content = system.read_to_string(path_obj).map_err(|e| {
        HealthyAiError::configuration(format!("Failed to read configuration file {path}: {e}"))
    })?;

    let mut config = parse_config(&content).map_err(|e| {
        HealthyAiError::configuration(format!(
            "Failed to parse YAML configuration in file {path}: {e}"
        ))
    })?;
    debug!("Loaded configuration from {path}");

    apply_env_overrides(system, &mut config)?;
    validate_config(&config)?;

    Ok(config)
}

/// Parse configuration text; an empty document yields the defaults
pub fn parse_config(content: &str) -> std::result::Result<EngineConfig, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(EngineConfig::default());
    }
    serde_yaml::from_str(content)
}
