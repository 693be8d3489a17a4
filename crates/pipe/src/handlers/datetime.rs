//! Date handler

use crate::combinators::Build;
use crate::foundation::utils::{is_date, parse_date};
use crate::foundation::{Defaults, Handler, defaults};

/// Options for [`date_with`]. Unset fields use the registry defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateOptions {
    /// Parse strings and epoch milliseconds.
    pub try_convert: Option<bool>,
}

impl DateOptions {
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
}

impl Defaults {
    /// [`date`] using these defaults.
    pub fn date(&self) -> Handler {
        self.date_with(DateOptions::default())
    }

    /// [`date_with`] using these defaults.
    pub fn date_with(&self, options: DateOptions) -> Handler {
        let builder = Build::new(is_date);
        if options.try_convert.unwrap_or(self.date.try_convert) {
            builder
                .with_convert(|input| input.as_ref().and_then(parse_date))
                .into_handler()
        } else {
            builder.into_handler()
        }
    }
}

/// Keeps dates.
///
/// ```rust
/// use chrono::Utc;
/// use nebula_pipe::prelude::*;
///
/// let now = Value::Date(Utc::now());
/// assert_eq!(date().call(Some(now.clone())).unwrap(), Some(now));
/// assert_eq!(date().call(Some(Value::Int(1))).unwrap(), None);
/// ```
pub fn date() -> Handler {
    defaults().date()
}

/// Keeps dates, with explicit options.
///
/// Conversion reads RFC 3339 strings, `YYYY-MM-DD` and
/// `YYYY-MM-DDTHH:MM:SS` (as UTC), and numbers as epoch milliseconds.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let parsed = date_with(DateOptions::new().with_try_convert(true));
/// let output = parsed.call(Some("2012-12-12T00:00:00.000Z".into())).unwrap();
/// assert_eq!(to_json(&output), serde_json::json!("2012-12-12T00:00:00.000Z"));
/// assert_eq!(parsed.call(Some("".into())).unwrap(), None);
/// ```
pub fn date_with(options: DateOptions) -> Handler {
    defaults().date_with(options)
}
