//! Data validation helpers
//!
//! Checks that run outside any schema layer. Every failure is reported as a
//! [`HealthyAiError::Validation`] whose message names the offending field.

use crate::error::{HealthyAiError, Result};
use std::fmt::Display;

/// Require a non-blank string, returning it trimmed
///
/// # Errors
///
/// Returns a validation error if the value is empty or only whitespace
#[inline]
pub fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HealthyAiError::validation(format!(
            "{field}: value cannot be empty"
        )));
    }
    Ok(trimmed)
}

/// Require `min <= value <= max`
///
/// # Errors
///
/// Returns a validation error if the value falls outside the inclusive range
/// or cannot be compared against it
#[inline]
pub fn require_in_range<T: PartialOrd + Display>(
    field: &str,
    value: T,
    min: T,
    max: T,
) -> Result<T> {
    if value >= min && value <= max {
        return Ok(value);
    }
    Err(HealthyAiError::validation(format!(
        "{field}: {value} is outside the allowed range [{min}, {max}]"
    )))
}

/// Require the value to exactly match one of `allowed`
///
/// # Errors
///
/// Returns a validation error listing the allowed values
#[inline]
pub fn require_one_of<'a>(field: &str, value: &'a str, allowed: &[&str]) -> Result<&'a str> {
    if allowed.contains(&value) {
        return Ok(value);
    }
    Err(HealthyAiError::validation(format!(
        "{field}: invalid value '{value}'. Must be one of: {}",
        allowed.join(", ")
    )))
}

/// Require a finite floating point number
///
/// # Errors
///
/// Returns a validation error for NaN and infinities
#[inline]
pub fn require_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        return Ok(value);
    }
    Err(HealthyAiError::validation(format!(
        "{field}: {value} is not a finite number"
    )))
}
