//! Configuration management module
//!
//! Handles YAML configuration parsing, environment overrides and validation

pub mod validation;
pub mod yaml;

use crate::error::{HealthyAiError, Result};
use crate::system::System;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable overriding `logging.level`
pub const LOG_LEVEL_ENV: &str = "HEALTHY_AI_ENGINE_LOG";

/// Environment variable overriding `logging.format`
pub const LOG_FORMAT_ENV: &str = "HEALTHY_AI_ENGINE_LOG_FORMAT";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Logging setup
    pub logging: LoggingConfig,
}

/// Logging section of the engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level name or `EnvFilter` directive string
    pub level: String,

    /// Output format
    pub format: LogFormat,

    /// Include the event target in each line
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::default(),
            with_target: false,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Full => "full",
            Self::Compact => "compact",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for LogFormat {
    type Err = HealthyAiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(HealthyAiError::configuration(format!(
                "Invalid log format '{s}'. Must be 'full', 'compact' or 'json'"
            ))),
        }
    }
}

impl EngineConfig {
    /// Load configuration from file, apply environment overrides and validate
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file is missing, unreadable or
    /// malformed, or if an override or resulting value is invalid
    pub fn load_from_file(system: &dyn System, path: &str) -> Result<Self> {
        yaml::load_config(system, path)
    }

    /// Build configuration from defaults and environment overrides only
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an override is invalid
    pub fn from_env(system: &dyn System) -> Result<Self> {
        let mut config = Self::default();
        validation::apply_env_overrides(system, &mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the logging level is unusable
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}
