//! Process-wide handler defaults
//!
//! Every handler family has options whose unset fields fall back to a
//! [`Defaults`] value. Handlers read their defaults **once, at construction
//! time**: changing the registry afterwards never alters a handler that
//! already exists, only the ones built after the change.
//!
//! Two ways to supply defaults:
//!
//! - the global registry, read by the free constructors (`int()`, `pipe(..)`)
//!   and changed with [`update_defaults`] / [`set_defaults`];
//! - an explicit [`Defaults`] value, whose constructor methods
//!   (`defaults.int()`, `defaults.pipe(..)`) ignore the registry.
//!
//! # Examples
//!
//! ```rust
//! use nebula_pipe::{Defaults, Value};
//!
//! let lenient = Defaults::from_json_str(r#"{ "int": { "try_convert": true } }"#).unwrap();
//! let int = lenient.int();
//! assert_eq!(int.call(Some("42".into())).unwrap(), Some(Value::Int(42)));
//! ```

use std::sync::LazyLock;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use serde::{Deserialize, Serialize};

use crate::combinators::Behavior;
use crate::foundation::ConfigError;

static DEFAULTS: LazyLock<RwLock<Defaults>> = LazyLock::new(|| RwLock::new(Defaults::default()));

// ============================================================================
// PER-FAMILY DEFAULTS
// ============================================================================

/// Defaults for [`string`](crate::handlers::string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringDefaults {
    /// Trim surrounding whitespace. Default `true`.
    pub trim: bool,
}

impl Default for StringDefaults {
    fn default() -> Self {
        Self { trim: true }
    }
}

/// Defaults for [`int`](crate::handlers::int).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntDefaults {
    /// Parse non-integer input. Default `false`.
    pub try_convert: bool,
}

/// Defaults for [`float`](crate::handlers::float).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatDefaults {
    /// Parse non-numeric input. Default `false`.
    pub try_convert: bool,
    /// Decimal places to round to. Only values in `0..100` take effect.
    pub fixed: Option<i64>,
}

/// Defaults for [`boolean`](crate::handlers::boolean).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BooleanDefaults {
    /// Coerce non-boolean input by truthiness. Default `true`.
    pub try_convert: bool,
    /// Treat `""` as absent instead of `false`. Default `false`.
    pub empty_string_as_absent: bool,
    /// Pass absent input through instead of coercing it to `false`. Default `false`.
    pub keep_absent: bool,
}

impl Default for BooleanDefaults {
    fn default() -> Self {
        Self {
            try_convert: true,
            empty_string_as_absent: false,
            keep_absent: false,
        }
    }
}

/// Defaults for [`date`](crate::handlers::date).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateDefaults {
    /// Parse strings and epoch milliseconds. Default `false`.
    pub try_convert: bool,
}

/// Defaults for [`array`](crate::handlers::array).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayDefaults {
    /// Wrap a single value as `[value]` (absent becomes `[]`). Default `false`.
    pub try_convert: bool,
    /// Drop absent items after mapping. Default `false`.
    pub remove_absent: bool,
}

/// Defaults for [`pipe`](crate::pipe()).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeDefaults {
    /// Behavior used when none is given. `None` resolves to
    /// [`Behavior::BreakOnAbsent`].
    pub behavior: Option<Behavior>,
}

impl Default for PipeDefaults {
    fn default() -> Self {
        Self {
            behavior: Some(Behavior::BreakOnAbsent),
        }
    }
}

// ============================================================================
// DEFAULTS
// ============================================================================

/// The full set of handler defaults.
///
/// Deserializes from partial documents: missing sections and fields keep
/// their built-in values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// String handler defaults.
    pub string: StringDefaults,
    /// Integer handler defaults.
    pub int: IntDefaults,
    /// Float handler defaults.
    pub float: FloatDefaults,
    /// Boolean handler defaults.
    pub boolean: BooleanDefaults,
    /// Date handler defaults.
    pub date: DateDefaults,
    /// Array handler defaults.
    pub array: ArrayDefaults,
    /// Composition defaults.
    pub pipe: PipeDefaults,
}

impl Defaults {
    /// Parses a (partial) JSON defaults document.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Reads defaults from an already parsed JSON value.
    pub fn from_json(document: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(document)?)
    }

    /// The behavior a composition uses when it was given none.
    #[must_use]
    pub fn pipe_behavior(&self) -> Behavior {
        self.pipe.behavior.clone().unwrap_or_default()
    }
}

// ============================================================================
// GLOBAL REGISTRY
// ============================================================================

/// Returns a snapshot of the global defaults.
#[must_use]
pub fn defaults() -> Defaults {
    DEFAULTS.read_recursive().clone()
}

/// Mutates the global defaults.
///
/// Only handlers constructed after this call observe the change. `f` edits
/// a copy that replaces the registry once it returns, so it may read
/// [`defaults`] or build handlers. Concurrent updates run one at a time.
///
/// ```rust
/// use nebula_pipe::{Value, handlers::int, update_defaults};
///
/// let strict = int();
/// update_defaults(|d| d.int.try_convert = true);
/// let lenient = int();
///
/// assert_eq!(strict.call(Some("4".into())).unwrap(), None);
/// assert_eq!(lenient.call(Some("4".into())).unwrap(), Some(Value::Int(4)));
/// # nebula_pipe::reset_defaults();
/// ```
pub fn update_defaults<F>(f: F)
where
    F: FnOnce(&mut Defaults),
{
    let current = DEFAULTS.upgradable_read();
    let mut next = current.clone();
    f(&mut next);
    let mut guard = RwLockUpgradableReadGuard::upgrade(current);
    *guard = next;
    tracing::debug!(defaults = ?*guard, "handler defaults updated");
}

/// Replaces the global defaults.
pub fn set_defaults(defaults: Defaults) {
    *DEFAULTS.write() = defaults;
    tracing::debug!("handler defaults replaced");
}

/// Restores the built-in global defaults.
pub fn reset_defaults() {
    set_defaults(Defaults::default());
}
