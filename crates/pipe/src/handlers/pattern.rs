//! Regex handler

use std::borrow::Cow;

use regex::Regex;

use crate::combinators::Build;
use crate::foundation::{ConfigError, Handler, Value};

/// Text a pattern is tested against: strings as is, numbers and booleans
/// in their display form.
fn text_of(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Int(_) | Value::Float(_) | Value::Bool(_) => Some(Cow::Owned(value.to_string())),
        _ => None,
    }
}

/// Keeps values whose text matches `pattern`.
///
/// Matching is unanchored; anchor the pattern to test the whole text.
///
/// ```rust
/// use nebula_pipe::prelude::*;
/// use regex::Regex;
///
/// let digits = regex(Regex::new(r"^\d+$").unwrap());
/// assert_eq!(digits.call(Some("42".into())).unwrap(), Some("42".into()));
/// assert_eq!(digits.call(Some(Value::Int(42))).unwrap(), Some(Value::Int(42)));
/// assert_eq!(digits.call(Some("4a".into())).unwrap(), None);
/// ```
pub fn regex(pattern: Regex) -> Handler {
    Build::new(move |value| text_of(value).is_some_and(|text| pattern.is_match(&text)))
        .into_handler()
}

/// Compiles `pattern` and builds a [`regex`] handler.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let slug = regex_str("^[a-z-]+$").unwrap();
/// assert_eq!(slug.call(Some("hello-world".into())).unwrap(), Some("hello-world".into()));
/// assert!(regex_str("(").is_err());
/// ```
pub fn regex_str(pattern: &str) -> Result<Handler, ConfigError> {
    Ok(regex(Regex::new(pattern)?))
}
