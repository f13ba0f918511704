//! `RUST_LOG` precedence over the configured level at install time

use healthy_ai_engine::logging::{self, RUST_LOG_ENV};
use healthy_ai_engine::system::MockSystem;
use healthy_ai_engine::{LogFormat, LoggingConfig};

#[test]
fn test_rust_log_wins_over_invalid_configured_level() {
    let system = MockSystem::new().with_env(RUST_LOG_ENV, "healthy_ai_engine=debug,warn");
    let config = LoggingConfig {
        level: "info,engine=notalevel".to_owned(),
        format: LogFormat::Compact,
        with_target: true,
    };

    let installed = logging::init(&system, &config);
    assert!(installed.is_ok(), "init failed: {installed:?}");
}
