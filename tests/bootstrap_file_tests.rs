//! Bootstrap from a configuration file

#![expect(clippy::unwrap_used, reason = "This is a test module")]

use healthy_ai_engine::system::MockSystem;
use healthy_ai_engine::{LogFormat, bootstrap};

#[test]
fn test_bootstrap_from_file_with_compact_format() {
    let system = MockSystem::new().with_file(
        "/etc/engine.yaml",
        b"logging:\n  level: \"healthy_ai_engine=trace,warn\"\n  format: compact\n",
    );

    let config = bootstrap(&system, Some("/etc/engine.yaml")).unwrap();
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.logging.level, "healthy_ai_engine=trace,warn");
    tracing::debug!("compact subscriber installed");
}
