//! Bootstrap from environment overrides only

#![expect(clippy::unwrap_used, reason = "This is a test module")]

use healthy_ai_engine::config::LOG_FORMAT_ENV;
use healthy_ai_engine::system::MockSystem;
use healthy_ai_engine::{LogFormat, bootstrap};

#[test]
fn test_bootstrap_from_env_with_json_format() {
    let system = MockSystem::new().with_env(LOG_FORMAT_ENV, "json");

    let config = bootstrap(&system, None).unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
    tracing::info!("json subscriber installed");
}
