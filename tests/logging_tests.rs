//! Logging bootstrap tests
//!
//! A global subscriber can be installed once per process, so every test that
//! reaches `logging::init` lives in this file and only one of them succeeds.

#![expect(clippy::unwrap_used, reason = "This is a test module")]

use healthy_ai_engine::system::MockSystem;
use healthy_ai_engine::{LoggingConfig, bootstrap, logging};

#[test]
fn test_second_init_is_a_configuration_error() {
    let config = LoggingConfig {
        level: "debug".to_owned(),
        ..LoggingConfig::default()
    };

    let first = logging::init(&MockSystem::new(), &config);
    assert!(first.is_ok(), "first init failed: {first:?}");

    let err = logging::init(&MockSystem::new(), &config).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("Failed to install tracing subscriber"));
}

#[test]
fn test_bootstrap_rejects_bad_config_before_installing() {
    let system = MockSystem::new().with_file("/etc/engine.yaml", b"logging:\n  level: \"\"\n");
    let err = bootstrap(&system, Some("/etc/engine.yaml")).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(err.message(), Some("Logging level cannot be empty"));
}
