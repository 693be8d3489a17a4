//! String handler

use crate::combinators::Build;
use crate::foundation::utils::is_string;
use crate::foundation::{Defaults, Handler, Value, defaults};

/// Options for [`string_with`]. Unset fields use the registry defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringOptions {
    /// Trim surrounding whitespace.
    pub trim: Option<bool>,
}

impl StringOptions {
    /// Options with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `trim`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = Some(trim);
        self
    }
}

fn trim(input: Option<Value>) -> Option<Value> {
    match input {
        Some(Value::String(s)) => Some(Value::String(s.trim().to_owned())),
        other => other,
    }
}

impl Defaults {
    /// [`string`] using these defaults.
    pub fn string(&self) -> Handler {
        self.string_with(StringOptions::default())
    }

    /// [`string_with`] using these defaults.
    pub fn string_with(&self, options: StringOptions) -> Handler {
        let builder = Build::new(is_string);
        if options.trim.unwrap_or(self.string.trim) {
            builder.with_post_process(Handler::from_fn(trim)).into_handler()
        } else {
            builder.into_handler()
        }
    }
}

/// Keeps strings, trimmed unless the registry says otherwise.
///
/// There is no conversion: any other value is absent.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// assert_eq!(string().call(Some(" a ".into())).unwrap(), Some("a".into()));
/// assert_eq!(string().call(Some(Value::Int(1))).unwrap(), None);
/// ```
pub fn string() -> Handler {
    defaults().string()
}

/// Keeps strings, with explicit options.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let raw = string_with(StringOptions::new().with_trim(false));
/// assert_eq!(raw.call(Some(" a ".into())).unwrap(), Some(" a ".into()));
/// ```
pub fn string_with(options: StringOptions) -> Handler {
    defaults().string_with(options)
}
