//! Smoke test verifying the package exposes its version

use healthy_ai_engine::{VERSION, version};

#[test]
fn test_package_version() {
    let value: &str = VERSION;
    assert_eq!(value, "0.1.0");
    assert_eq!(value, value.trim());
}

#[test]
fn test_version_fn_matches_constant() {
    assert_eq!(version(), VERSION);
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}
