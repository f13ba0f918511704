//! `healthy-ai-engine` - shared foundations for the healthy-ai engine
//!
//! This library provides the package error taxonomy ([`HealthyAiError`] with
//! its configuration and validation kinds), the package version, and the
//! configuration and logging bootstrap that report failures through it.

pub mod config;
pub mod error;
pub mod logging;
pub mod system;
pub mod validation;

pub use config::{EngineConfig, LogFormat, LoggingConfig};
pub use error::{ErrorKind, HealthyAiError, Result};

/// Package version, as published in the package metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package version
#[must_use]
#[inline]
pub const fn version() -> &'static str {
    VERSION
}

/// Load configuration and install logging in one step
///
/// With `Some(path)` the YAML file is loaded, otherwise defaults plus
/// environment overrides are used.
///
/// # Errors
///
/// Returns a configuration error if the configuration is invalid or logging
/// cannot be installed
pub fn bootstrap(system: &dyn system::System, config_path: Option<&str>) -> Result<EngineConfig> {
    let config = match config_path {
        Some(path) => EngineConfig::load_from_file(system, path)?,
        None => EngineConfig::from_env(system)?,
    };
    logging::init(system, &config.logging)?;
    tracing::debug!("healthy-ai-engine {VERSION} initialized");
    Ok(config)
}
