//! Absence predicates and safe primitive conversions.
//!
//! These are the building blocks of the leaf handlers. None of them panic
//! or raise: a value that cannot be converted yields `None`.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::foundation::Value;

static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[+-]?\d+").expect("integer prefix pattern is valid"));

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("float prefix pattern is valid")
});

// ============================================================================
// PREDICATES
// ============================================================================

/// `true` when the value is absent.
#[must_use]
pub fn is_absent(value: Option<&Value>) -> bool {
    value.is_none()
}

/// `true` for strings.
#[must_use]
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// `true` for either numeric variant, `NaN` included.
#[must_use]
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// `true` for integral numbers.
#[must_use]
pub fn is_integer(value: &Value) -> bool {
    value.is_integer()
}

/// `true` for dates.
#[must_use]
pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

/// `true` for booleans.
#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// `true` for arrays.
#[must_use]
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Returns `value` when present, otherwise `default`.
#[must_use]
pub fn ensure(value: Option<Value>, default: Option<Value>) -> Option<Value> {
    value.or(default)
}

/// Parses the leading integer of a string, or truncates a float.
///
/// Trailing garbage after the digits is ignored (`"12px"` parses as `12`).
/// The result must fit an `i64`: a longer digit prefix or a float beyond
/// the `i64` range is absent rather than clamped or rounded.
#[must_use]
pub fn parse_int(value: &Value) -> Option<Value> {
    match value {
        Value::Int(n) => Some(Value::Int(*n)),
        Value::Float(f) if in_i64_range(f.trunc()) => Some(Value::Int(f.trunc() as i64)),
        Value::String(s) => INT_PREFIX
            .find(s)
            .and_then(|m| m.as_str().trim_start().parse::<i64>().ok())
            .map(Value::Int),
        _ => None,
    }
}

fn in_i64_range(f: f64) -> bool {
    f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Parses the leading decimal number of a string.
///
/// Surrounding whitespace and trailing garbage are ignored
/// (`"1.54  "` parses as `1.54`).
#[must_use]
pub fn parse_float(value: &Value) -> Option<Value> {
    match value {
        Value::Int(_) | Value::Float(_) => Some(value.clone()),
        Value::String(s) => FLOAT_PREFIX
            .find(s)
            .and_then(|m| m.as_str().trim_start().parse::<f64>().ok())
            .map(Value::Float),
        _ => None,
    }
}

/// Parses a date from a string or from epoch milliseconds.
///
/// Accepted strings: RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` and `YYYY-MM-DD`,
/// the last two read as UTC.
#[must_use]
pub fn parse_date(value: &Value) -> Option<Value> {
    let date = match value {
        Value::Date(d) => Some(*d),
        Value::Int(ms) => DateTime::from_timestamp_millis(*ms),
        Value::Float(ms) if ms.is_finite() => DateTime::from_timestamp_millis(ms.trunc() as i64),
        Value::String(s) => parse_date_str(s.trim()),
        _ => None,
    };
    date.map(Value::Date)
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(d.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(d.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4", Some(4))]
    #[case("  -17", Some(-17))]
    #[case("12px", Some(12))]
    #[case("s", None)]
    #[case("", None)]
    #[case("9223372036854775807", Some(i64::MAX))]
    #[case("99999999999999999999", None)]
    #[case("-99999999999999999999x", None)]
    fn parse_int_reads_prefix(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_int(&Value::from(input)), expected.map(Value::Int));
    }

    #[test]
    fn parse_int_truncates_floats() {
        assert_eq!(parse_int(&Value::Float(1.9)), Some(Value::Int(1)));
        assert_eq!(parse_int(&Value::Float(f64::NAN)), None);
        assert_eq!(parse_int(&Value::Float(f64::INFINITY)), None);
        assert_eq!(parse_int(&Value::Float(1e20)), None);
        assert_eq!(parse_int(&Value::Float(-1e18)), Some(Value::Int(-1_000_000_000_000_000_000)));
        assert_eq!(parse_int(&Value::Bool(true)), None);
    }

    #[rstest]
    #[case("1.54  ", Some(1.54))]
    #[case(".5", Some(0.5))]
    #[case("1e3x", Some(1000.0))]
    #[case("abc", None)]
    fn parse_float_reads_prefix(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_float(&Value::from(input)), expected.map(Value::Float));
    }

    #[test]
    fn parse_date_formats() {
        let expected = "2012-12-12T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        for input in ["2012-12-12T00:00:00.000Z", "2012-12-12T00:00:00", "2012-12-12"] {
            assert_eq!(
                parse_date(&Value::from(input)),
                Some(Value::Date(expected)),
                "{input}"
            );
        }
        assert_eq!(parse_date(&Value::from("")), None);
        assert_eq!(parse_date(&Value::from("not a date")), None);
    }

    #[test]
    fn parse_date_from_millis() {
        let parsed = parse_date(&Value::Int(1_000)).unwrap();
        assert_eq!(parsed.as_date().unwrap().timestamp(), 1);
    }

    #[test]
    fn ensure_prefers_value() {
        assert_eq!(ensure(Some(Value::Int(1)), Some(Value::Int(2))), Some(Value::Int(1)));
        assert_eq!(ensure(None, Some(Value::Int(2))), Some(Value::Int(2)));
    }
}
