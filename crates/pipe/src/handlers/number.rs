//! Numeric handlers
//!
//! [`int`] keeps integers, [`float`] keeps any number. Both can parse the
//! leading number of a string when conversion is enabled; a string with no
//! leading number is absent.

use std::sync::LazyLock;

use crate::combinators::Build;
use crate::foundation::utils::{is_integer, is_number, parse_float, parse_int};
use crate::foundation::{Defaults, Handler, Value, defaults};
use crate::handlers::{max, min};

/// Normalizes `fixed` digits: integers in `0..100`, anything else absent.
static FIXED_DIGITS: LazyLock<Handler> = LazyLock::new(|| {
    let context = Defaults::default();
    context.pipe([context.int(), min(0), max(100)])
});

// ============================================================================
// OPTIONS
// ============================================================================

/// Options for [`int_with`]. Unset fields use the registry defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntOptions {
    /// Parse non-integer input.
    pub try_convert: Option<bool>,
}

impl IntOptions {
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

/// Options for [`float_with`]. Unset fields use the registry defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatOptions {
    /// Parse non-numeric input.
    pub try_convert: Option<bool>,
    /// Decimal places to round floats to. Only values in `0..100` take
    /// effect; an out-of-range value falls back to the registry default.
    pub fixed: Option<i64>,
}

impl FloatOptions {
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

    /// Sets `fixed`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fixed(mut self, fixed: i64) -> Self {
        self.fixed = Some(fixed);
        self
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn fixed_digits(fixed: Option<i64>) -> Option<usize> {
    let digits = FIXED_DIGITS.call(fixed.map(Value::Int)).ok().flatten()?;
    digits.as_i64().and_then(|n| usize::try_from(n).ok())
}

fn round_to(digits: usize) -> Handler {
    Handler::from_fn(move |input| match input {
        Some(Value::Float(f)) if f.is_finite() => format!("{f:.digits$}")
            .parse::<f64>()
            .ok()
            .map(Value::Float),
        other => other,
    })
}

fn convert_with(parse: fn(&Value) -> Option<Value>) -> impl Fn(Option<Value>) -> Option<Value> {
    move |input| input.as_ref().and_then(parse)
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl Defaults {
    /// [`int`] using these defaults.
    pub fn int(&self) -> Handler {
        self.int_with(IntOptions::default())
    }

    /// [`int_with`] using these defaults.
    pub fn int_with(&self, options: IntOptions) -> Handler {
        let builder = Build::new(is_integer);
        if options.try_convert.unwrap_or(self.int.try_convert) {
            builder.with_convert(convert_with(parse_int)).into_handler()
        } else {
            builder.into_handler()
        }
    }

    /// [`float`] using these defaults.
    pub fn float(&self) -> Handler {
        self.float_with(FloatOptions::default())
    }

    /// [`float_with`] using these defaults.
    pub fn float_with(&self, options: FloatOptions) -> Handler {
        let mut builder = Build::new(is_number);
        if options.try_convert.unwrap_or(self.float.try_convert) {
            builder = builder.with_convert(convert_with(parse_float));
        }
        if let Some(digits) = fixed_digits(options.fixed).or_else(|| fixed_digits(self.float.fixed)) {
            builder = builder.with_post_process(round_to(digits));
        }
        builder.into_handler()
    }
}

/// Keeps integers.
///
/// Floats without a fractional part count as integers. With conversion the
/// leading integer of a string is parsed and other floats are truncated.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// assert_eq!(int().call(Some(Value::Int(8))).unwrap(), Some(Value::Int(8)));
/// assert_eq!(int().call(Some("8".into())).unwrap(), None);
/// ```
pub fn int() -> Handler {
    defaults().int()
}

/// Keeps integers, with explicit options.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let lenient = int_with(IntOptions::new().with_try_convert(true));
/// assert_eq!(lenient.call(Some("12px".into())).unwrap(), Some(Value::Int(12)));
/// assert_eq!(lenient.call(Some("px".into())).unwrap(), None);
/// ```
pub fn int_with(options: IntOptions) -> Handler {
    defaults().int_with(options)
}

/// Keeps numbers.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// assert_eq!(float().call(Some(Value::Float(1.23))).unwrap(), Some(Value::Float(1.23)));
/// assert_eq!(float().call(Some("1.54".into())).unwrap(), None);
/// ```
pub fn float() -> Handler {
    defaults().float()
}

/// Keeps numbers, with explicit options.
///
/// `fixed` rounds floats to that many decimal places; integers pass as
/// they are.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let rounded = float_with(FloatOptions::new().with_fixed(2));
/// assert_eq!(rounded.call(Some(Value::Float(1.233333))).unwrap(), Some(Value::Float(1.23)));
///
/// let parsed = float_with(FloatOptions::new().with_try_convert(true));
/// assert_eq!(parsed.call(Some("1.54  ".into())).unwrap(), Some(Value::Float(1.54)));
/// ```
pub fn float_with(options: FloatOptions) -> Handler {
    defaults().float_with(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), Some(2))]
    #[case(Some(0), Some(0))]
    #[case(Some(99), Some(99))]
    #[case(Some(100), None)]
    #[case(Some(-1), None)]
    #[case(None, None)]
    fn fixed_digits_are_bounded(#[case] fixed: Option<i64>, #[case] expected: Option<usize>) {
        assert_eq!(fixed_digits(fixed), expected);
    }

    #[rstest]
    #[case(Value::Int(3), Some(Value::Int(3)))]
    #[case(Value::Float(3.0), Some(Value::Float(3.0)))]
    #[case(Value::Float(3.5), None)]
    #[case(Value::from("3"), None)]
    #[case(Value::Bool(true), None)]
    fn strict_int(#[case] input: Value, #[case] expected: Option<Value>) {
        assert_eq!(Defaults::default().int().call(Some(input)).unwrap(), expected);
    }

    #[rstest]
    #[case(Value::Float(3.9), Some(Value::Int(3)))]
    #[case(Value::from(" -4 "), Some(Value::Int(-4)))]
    #[case(Value::from("abc"), None)]
    #[case(Value::Bool(true), None)]
    fn converting_int(#[case] input: Value, #[case] expected: Option<Value>) {
        let handler = Defaults::default().int_with(IntOptions::new().with_try_convert(true));
        assert_eq!(handler.call(Some(input)).unwrap(), expected);
    }

    #[test]
    fn absent_input_is_absent_even_when_converting() {
        let context = Defaults::default();
        assert_eq!(context.int_with(IntOptions::new().with_try_convert(true)).call(None).unwrap(), None);
        assert_eq!(context.float_with(FloatOptions::new().with_try_convert(true)).call(None).unwrap(), None);
    }

    #[test]
    fn out_of_range_fixed_falls_back_to_registry() {
        let mut context = Defaults::default();
        context.float.fixed = Some(1);
        let handler = context.float_with(FloatOptions::new().with_fixed(500));
        assert_eq!(handler.call(Some(Value::Float(2.26))).unwrap(), Some(Value::Float(2.3)));
    }

    #[test]
    fn option_fixed_wins_over_registry() {
        let mut context = Defaults::default();
        context.float.fixed = Some(1);
        let handler = context.float_with(FloatOptions::new().with_fixed(0));
        assert_eq!(handler.call(Some(Value::Float(2.6))).unwrap(), Some(Value::Float(3.0)));
    }

    #[test]
    fn fixed_leaves_integers_alone() {
        let handler = Defaults::default().float_with(FloatOptions::new().with_fixed(2));
        assert_eq!(handler.call(Some(Value::Int(7))).unwrap(), Some(Value::Int(7)));
    }
}
