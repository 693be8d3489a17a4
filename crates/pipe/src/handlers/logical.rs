//! Boolean handler

use crate::combinators::Build;
use crate::foundation::utils::is_boolean;
use crate::foundation::{BooleanDefaults, Defaults, Handler, Value, defaults};

/// Options for [`boolean_with`]. Unset fields use the registry defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanOptions {
    /// Coerce non-boolean input by truthiness.
    pub try_convert: Option<bool>,
    /// Treat `""` as absent instead of `false`.
    pub empty_string_as_absent: Option<bool>,
    /// Pass absent input through instead of coercing it to `false`.
    pub keep_absent: Option<bool>,
}

impl BooleanOptions {
    /// Options with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `try_convert`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_try_convert(mut self, try_convert: bool) -> Self {
        self.try_convert = Some(try_convert);
        self
    }

    /// Sets `empty_string_as_absent`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_empty_string_as_absent(mut self, enabled: bool) -> Self {
        self.empty_string_as_absent = Some(enabled);
        self
    }

    /// Sets `keep_absent`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_keep_absent(mut self, enabled: bool) -> Self {
        self.keep_absent = Some(enabled);
        self
    }

    fn resolve(self, defaults: &BooleanDefaults) -> BooleanDefaults {
        BooleanDefaults {
            try_convert: self.try_convert.unwrap_or(defaults.try_convert),
            empty_string_as_absent: self
                .empty_string_as_absent
                .unwrap_or(defaults.empty_string_as_absent),
            keep_absent: self.keep_absent.unwrap_or(defaults.keep_absent),
        }
    }
}

fn coerce(settings: &BooleanDefaults, input: Option<Value>) -> Option<Value> {
    match input {
        None if settings.keep_absent => None,
        None => Some(Value::Bool(false)),
        Some(Value::String(s)) if s.is_empty() && settings.empty_string_as_absent => None,
        Some(value) => Some(Value::Bool(value.is_truthy())),
    }
}

impl Defaults {
    /// [`boolean`] using these defaults.
    pub fn boolean(&self) -> Handler {
        self.boolean_with(BooleanOptions::default())
    }

    /// [`boolean_with`] using these defaults.
    pub fn boolean_with(&self, options: BooleanOptions) -> Handler {
        let settings = options.resolve(&self.boolean);
        let builder = Build::new(is_boolean);
        if settings.try_convert {
            builder
                .with_convert(move |input| coerce(&settings, input))
                .into_handler()
        } else {
            builder.into_handler()
        }
    }
}

/// Keeps booleans and, by default, coerces everything else by truthiness.
///
/// `false`, `0`, `NaN` and `""` are falsy; any other value, the string
/// `"false"` included, is truthy. Absent input becomes `false`.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// assert_eq!(boolean().call(Some(Value::Int(1))).unwrap(), Some(Value::Bool(true)));
/// assert_eq!(boolean().call(Some("".into())).unwrap(), Some(Value::Bool(false)));
/// assert_eq!(boolean().call(Some("false".into())).unwrap(), Some(Value::Bool(true)));
/// ```
pub fn boolean() -> Handler {
    defaults().boolean()
}

/// Keeps booleans, with explicit options.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let strict = boolean_with(BooleanOptions::new().with_try_convert(false));
/// assert_eq!(strict.call(Some("false".into())).unwrap(), None);
///
/// let optional = boolean_with(BooleanOptions::new().with_keep_absent(true));
/// assert_eq!(optional.call(None).unwrap(), None);
/// ```
pub fn boolean_with(options: BooleanOptions) -> Handler {
    defaults().boolean_with(options)
}
