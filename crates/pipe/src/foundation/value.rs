//! Dynamic value model
//!
//! Handlers operate on [`Value`]s wrapped in `Option`: `None` is the single
//! representation of absence, both at handler boundaries and inside arrays
//! and objects. There is no `Null` variant.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Array payload. Elements may be absent.
pub type Array = Vec<Option<Value>>;

/// Object payload. Insertion-ordered; a key may map to an absent value.
pub type Object = IndexMap<String, Option<Value>>;

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed value flowing through a pipeline.
///
/// Numbers compare and test equal numerically across [`Value::Int`] and
/// [`Value::Float`], so `Value::Int(1) == Value::Float(1.0)`.
///
/// # Examples
///
/// ```rust
/// use nebula_pipe::Value;
/// use serde_json::json;
///
/// let value = Value::from_json(json!({ "a": [1, null, "x"] })).unwrap();
/// assert_eq!(value.get("a").and_then(|a| a.get("0")), Some(&Value::Int(1)));
/// assert_eq!(value.to_json(), json!({ "a": [1, null, "x"] }));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// Integer number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 text.
    String(String),
    /// Point in time (UTC). Serialized as an RFC 3339 string.
    Date(DateTime<Utc>),
    /// Ordered list of possibly absent values.
    Array(Array),
    /// Ordered map of possibly absent values.
    Object(Object),
}

impl Value {
    /// Builds an array value from possibly absent items.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Option<Value>>,
    {
        Self::Array(items.into_iter().collect())
    }

    /// Builds an object value from `(key, value)` pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<Value>)>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Short type name, used in log fields and error params.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    // ==================== Accessors ====================

    /// Returns the text if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int` or an integral `Float`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    /// Returns the number as `f64` for either numeric variant.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the date if this is a date.
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the items if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Length of a string (in characters) or an array (in items).
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.chars().count()),
            Self::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Looks up a property of an object, or an index of an array.
    ///
    /// Returns `None` for missing keys, absent entries and scalars.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(map) => map.get(key).and_then(Option::as_ref),
            Self::Array(items) => key
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index))
                .and_then(Option::as_ref),
            _ => None,
        }
    }

    // ==================== Predicates ====================

    /// `true` for `Int` and `Float`.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// `true` for `Int` and for finite `Float`s without a fractional part.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.as_i64().is_some()
    }

    /// Truthiness: `false`, `0`, `NaN` and `""` are falsy, everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Date(_) | Self::Array(_) | Self::Object(_) => true,
        }
    }

    // ==================== JSON interop ====================

    /// Converts a JSON document. `null` becomes absence.
    pub fn from_json(json: serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(Self::Bool(b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Self::Int(i)),
                None => n.as_f64().map(Self::Float),
            },
            serde_json::Value::String(s) => Some(Self::String(s)),
            serde_json::Value::Array(items) => Some(Self::Array(
                items.into_iter().map(Self::from_json).collect(),
            )),
            serde_json::Value::Object(map) => Some(Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from_json(v)))
                    .collect(),
            )),
        }
    }

    /// Converts to a JSON document. Absent entries and non-finite floats
    /// become `null`; dates become RFC 3339 strings.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(n) => serde_json::Value::from(*n),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Date(d) => {
                serde_json::Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
            Self::Object(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
            ),
        }
    }
}

/// Converts a possibly absent value to JSON, mapping absence to `null`.
#[must_use]
pub fn to_json(value: &Option<Value>) -> serde_json::Value {
    value
        .as_ref()
        .map_or(serde_json::Value::Null, Value::to_json)
}

// ============================================================================
// COMPARISON
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Int(_) | Self::Float(_), Self::Int(_) | Self::Float(_)) => {
                self.as_f64() == other.as_f64()
            }
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    /// Orders numbers numerically, strings lexicographically, dates
    /// chronologically and booleans `false < true`. Any other pairing is
    /// unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Int(_) | Self::Float(_), Self::Int(_) | Self::Float(_)) => {
                self.as_f64()?.partial_cmp(&other.as_f64()?)
            }
            (Self::String(a), Self::String(b)) => a.partial_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.partial_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Date(d) => f.write_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Array(_) | Self::Object(_) => write!(f, "{}", self.to_json()),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items.into_iter().map(Some).collect())
    }
}

impl From<Array> for Value {
    fn from(items: Array) -> Self {
        Self::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Self::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_compare_across_variants() {
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Int(1), Value::Float(1.5));
        assert!(Value::Int(2) > Value::Float(1.5));
        assert_eq!(Value::Float(f64::NAN).partial_cmp(&Value::Int(1)), None);
    }

    #[test]
    fn mixed_kinds_are_unordered() {
        assert_eq!(Value::from("10").partial_cmp(&Value::Int(10)), None);
        assert_ne!(Value::from("10"), Value::Int(10));
    }

    #[test]
    fn json_null_is_absence() {
        assert_eq!(Value::from_json(json!(null)), None);
        let value = Value::from_json(json!([1, null])).unwrap();
        assert_eq!(value, Value::array([Some(Value::Int(1)), None]));
    }

    #[test]
    fn get_walks_objects_and_arrays() {
        let value = Value::from_json(json!({ "a": [10, 20], "b": null })).unwrap();
        assert_eq!(value.get("a").and_then(|a| a.get("1")), Some(&Value::Int(20)));
        assert_eq!(value.get("b"), None);
        assert_eq!(value.get("missing"), None);
        assert_eq!(Value::Int(1).get("a"), None);
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("false").is_truthy());
        assert!(Value::array([]).is_truthy());
    }

    #[test]
    fn length_counts_chars() {
        assert_eq!(Value::from("héllo").length(), Some(5));
        assert_eq!(Value::Int(5).length(), None);
    }

    #[test]
    fn serialize_matches_to_json() {
        let date = "2012-12-12T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let value = Value::object([
            ("a", Some(Value::Int(1))),
            ("b", None),
            ("c", Some(Value::Date(date))),
        ]);
        assert_eq!(serde_json::to_value(&value).unwrap(), value.to_json());
    }
}
