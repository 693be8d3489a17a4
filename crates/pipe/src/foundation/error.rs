//! Error types
//!
//! Handlers report "no usable value" by returning `None`, never through an
//! error. [`HandlerError`] is only produced by the guard handlers
//! ([`throw_error`](crate::throw_error) and [`required`](crate::required)),
//! and [`ConfigError`] only at construction time.

use std::borrow::Cow;

use crate::foundation::Value;

// ============================================================================
// HANDLER ERROR
// ============================================================================

/// An error raised on purpose by a guard handler.
///
/// Uses `Cow<'static, str>` so static codes and messages do not allocate.
///
/// # Examples
///
/// ```rust
/// use nebula_pipe::HandlerError;
///
/// let error = HandlerError::new("required", "port is required").with_field("port");
/// assert_eq!(error.to_string(), "[required] port is required");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct HandlerError {
    /// Error code for programmatic handling.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Optional field name, set by callers that guard a projected field.
    pub field: Option<Cow<'static, str>>,

    /// The offending value, when the error was built from one.
    pub value: Option<Value>,
}

impl HandlerError {
    /// Creates a new error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            value: None,
        }
    }

    /// The default error for a missing value.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "Value is required")
    }

    /// Sets the field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attaches the offending value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: Option<Value>) -> Self {
        self.value = value;
        self
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Errors raised while building handlers or loading defaults.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A regex handler was given an invalid pattern.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A defaults document could not be parsed.
    #[error("invalid defaults document: {0}")]
    InvalidDefaults(#[from] serde_json::Error),

    /// A behavior name did not match any built-in behavior.
    #[error("unknown behavior '{0}', expected one of: forward, break_on_present, break_on_absent")]
    UnknownBehavior(String),
}
