//! Error types shared by every healthy-ai-engine component

use std::fmt;
use thiserror::Error;

/// Result alias used across the engine
pub type Result<T> = std::result::Result<T, HealthyAiError>;

/// The kind of failure a [`HealthyAiError`] represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic package-level failure
    Engine,
    /// Invalid, missing or contradictory configuration
    Configuration,
    /// A data value failed a validation rule
    Validation,
}

impl ErrorKind {
    /// Human readable label, also used as the `Display` prefix of errors
    #[must_use]
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Engine => "engine error",
            Self::Configuration => "configuration error",
            Self::Validation => "validation error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Base error type for all healthy-ai-engine errors
///
/// Configuration and validation failures are variants of this type, so
/// anything that handles a `HealthyAiError` handles every kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HealthyAiError {
    /// Engine Error - generic failure originating from this package
    #[error("{}", render(ErrorKind::Engine, .message.as_deref()))]
    Engine { message: Option<String> },

    /// Configuration Error - missing or invalid configuration
    #[error("{}", render(ErrorKind::Configuration, .message.as_deref()))]
    Configuration { message: Option<String> },

    /// Validation Error - data failed a check done outside any schema layer
    #[error("{}", render(ErrorKind::Validation, .message.as_deref()))]
    Validation { message: Option<String> },
}

fn render(kind: ErrorKind, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("{kind}: {message}"),
        None => kind.label().to_owned(),
    }
}

impl HealthyAiError {
    /// Create an engine error
    #[inline]
    pub fn engine<S: Into<String>>(message: S) -> Self {
        Self::Engine {
            message: Some(message.into()),
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: Some(message.into()),
        }
    }

    /// Create a validation error
    #[inline]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: Some(message.into()),
        }
    }

    /// The kind of this error
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match *self {
            Self::Engine { .. } => ErrorKind::Engine,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// The message supplied at construction, if any
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Engine { message }
            | Self::Configuration { message }
            | Self::Validation { message } => message.as_deref(),
        }
    }

    /// Whether this is a generic engine error
    #[must_use]
    #[inline]
    pub const fn is_engine(&self) -> bool {
        matches!(self.kind(), ErrorKind::Engine)
    }

    /// Whether this is a configuration error
    #[must_use]
    #[inline]
    pub const fn is_configuration(&self) -> bool {
        matches!(self.kind(), ErrorKind::Configuration)
    }

    /// Whether this is a validation error
    #[must_use]
    #[inline]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }
}

/// Build an error of the given kind without a message
impl From<ErrorKind> for HealthyAiError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Engine => Self::Engine { message: None },
            ErrorKind::Configuration => Self::Configuration { message: None },
            ErrorKind::Validation => Self::Validation { message: None },
        }
    }
}

impl Default for HealthyAiError {
    fn default() -> Self {
        Self::from(ErrorKind::Engine)
    }
}
