//! Unit tests for data validation helpers

#![expect(clippy::unwrap_used, reason = "This is a test module")]

use healthy_ai_engine::ErrorKind;
use healthy_ai_engine::validation::{
    require_finite, require_in_range, require_non_empty, require_one_of,
};

#[test]
fn test_require_non_empty() {
    assert_eq!(require_non_empty("name", "  alice ").ok(), Some("alice"));

    let err = require_non_empty("name", "   ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), Some("name: value cannot be empty"));
    assert!(require_non_empty("name", "").is_err());
}

#[test]
fn test_require_in_range() {
    assert_eq!(require_in_range("temperature", 0.5, 0.0, 2.0).ok(), Some(0.5));

    let err = require_in_range("temperature", 2.5, 0.0, 2.0).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("temperature: 2.5 is outside the allowed range [0, 2]"));
}

#[test]
fn test_require_one_of() {
    let allowed = ["low", "medium", "high"];
    assert_eq!(require_one_of("priority", "high", &allowed).ok(), Some("high"));

    let err = require_one_of("priority", "High", &allowed).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("Must be one of: low, medium, high"));
}

#[test]
fn test_require_finite() {
    assert_eq!(require_finite("weight", 72.5).ok(), Some(72.5));
    assert!(require_finite("weight", f64::NAN).unwrap_err().is_validation());
    assert!(require_finite("weight", f64::INFINITY).is_err());
    assert!(require_finite("weight", f64::NEG_INFINITY).is_err());
}
