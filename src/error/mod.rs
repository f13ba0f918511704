//! Error handling module
//!
//! Defines the package error taxonomy: one base error type with
//! configuration and validation kinds

pub mod types;

pub use types::*;
