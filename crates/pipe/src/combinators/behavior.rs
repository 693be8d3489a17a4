//! Continuation policies for compositions
//!
//! After every handler in a [`pipe`](crate::pipe()), the composition asks its
//! [`Behavior`] what value to carry forward and whether to run the next
//! handler. The behavior is the only authority on continuation.
//!
//! # Built-in behaviors
//!
//! | Behavior | Carries | Continues while |
//! |---|---|---|
//! | [`Forward`](Behavior::Forward) | current value | always |
//! | [`BreakOnAbsent`](Behavior::BreakOnAbsent) | current value | current value is present |
//! | [`BreakOnPresent`](Behavior::BreakOnPresent) | current value, or previous when absent | current value is absent |

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::{ConfigError, Value};

/// What a behavior sees after a handler ran.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorContext {
    /// Output of the handler that just ran.
    pub current_value: Option<Value>,
    /// Input that handler received.
    pub prev_value: Option<Value>,
    /// Zero-based position of the handler that just ran.
    pub handler_index: usize,
}

/// What a behavior decides.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorResult {
    /// Value carried into the next handler, or returned as the final output.
    pub value: Option<Value>,
    /// `false` halts the composition with `value` as its output.
    pub next: bool,
}

impl BehaviorResult {
    /// Carry `value` and run the next handler.
    #[must_use]
    pub fn proceed(value: Option<Value>) -> Self {
        Self { value, next: true }
    }

    /// Halt with `value`.
    #[must_use]
    pub fn halt(value: Option<Value>) -> Self {
        Self { value, next: false }
    }
}

type BehaviorFn = dyn Fn(BehaviorContext) -> BehaviorResult + Send + Sync;

// ============================================================================
// BEHAVIOR
// ============================================================================

/// A continuation policy: the three built-ins plus user-supplied ones.
///
/// # Examples
///
/// ```rust
/// use nebula_pipe::{Behavior, BehaviorResult, PipeOptions, Value, pipe_with};
/// use nebula_pipe::handlers::{int, max, min};
///
/// // Stop after the first handler, whatever it returns.
/// let first_only = Behavior::custom(|ctx| BehaviorResult {
///     next: ctx.handler_index < 1,
///     value: ctx.current_value,
/// });
/// let handler = pipe_with(PipeOptions::new().with_behavior(first_only), [int(), min(2), max(10)]);
/// assert_eq!(handler.call(Some(Value::Int(12))).unwrap(), Some(Value::Int(12)));
/// ```
#[derive(Clone, Default)]
pub enum Behavior {
    /// Run every handler; carry each output unchanged.
    Forward,
    /// Stop at the first present output; an absent output restores the
    /// previous value.
    BreakOnPresent,
    /// Stop at the first absent output.
    #[default]
    BreakOnAbsent,
    /// A user-supplied policy.
    Custom(Arc<BehaviorFn>),
}

impl Behavior {
    /// Wraps a closure as a custom behavior.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(BehaviorContext) -> BehaviorResult + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Decides what happens after a handler ran.
    pub fn apply(&self, context: BehaviorContext) -> BehaviorResult {
        match self {
            Self::Forward => BehaviorResult::proceed(context.current_value),
            Self::BreakOnPresent => match context.current_value {
                Some(value) => BehaviorResult::halt(Some(value)),
                None => BehaviorResult::proceed(context.prev_value),
            },
            Self::BreakOnAbsent => match context.current_value {
                Some(value) => BehaviorResult::proceed(Some(value)),
                None => BehaviorResult::halt(None),
            },
            Self::Custom(f) => (**f)(context),
        }
    }

    /// Stable snake_case name, as used in defaults documents.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::BreakOnPresent => "break_on_present",
            Self::BreakOnAbsent => "break_on_absent",
            Self::Custom(_) => "custom",
        }
    }

    /// Looks up a built-in behavior by name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "forward" => Ok(Self::Forward),
            "break_on_present" => Ok(Self::BreakOnPresent),
            "break_on_absent" => Ok(Self::BreakOnAbsent),
            other => Err(ConfigError::UnknownBehavior(other.to_owned())),
        }
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "Forward",
            Self::BreakOnPresent => "BreakOnPresent",
            Self::BreakOnAbsent => "BreakOnAbsent",
            Self::Custom(_) => "Custom(<function>)",
        })
    }
}

impl PartialEq for Behavior {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            (Self::Forward, Self::Forward)
            | (Self::BreakOnPresent, Self::BreakOnPresent)
            | (Self::BreakOnAbsent, Self::BreakOnAbsent) => true,
            _ => false,
        }
    }
}

impl Serialize for Behavior {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Custom(_) => Err(serde::ser::Error::custom(
                "custom behaviors cannot be serialized",
            )),
            builtin => serializer.serialize_str(builtin.name()),
        }
    }
}

impl<'de> Deserialize<'de> for Behavior {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(current: Option<i64>, prev: Option<i64>) -> BehaviorContext {
        BehaviorContext {
            current_value: current.map(Value::Int),
            prev_value: prev.map(Value::Int),
            handler_index: 0,
        }
    }

    #[test]
    fn forward_always_continues() {
        let result = Behavior::Forward.apply(context(None, Some(1)));
        assert_eq!(result, BehaviorResult::proceed(None));
    }

    #[test]
    fn break_on_absent_halts_with_absence() {
        assert_eq!(
            Behavior::BreakOnAbsent.apply(context(None, Some(1))),
            BehaviorResult::halt(None)
        );
        assert_eq!(
            Behavior::BreakOnAbsent.apply(context(Some(2), Some(1))),
            BehaviorResult::proceed(Some(Value::Int(2)))
        );
    }

    #[test]
    fn break_on_present_keeps_previous_on_absence() {
        assert_eq!(
            Behavior::BreakOnPresent.apply(context(None, Some(1))),
            BehaviorResult::proceed(Some(Value::Int(1)))
        );
        assert_eq!(
            Behavior::BreakOnPresent.apply(context(Some(2), Some(1))),
            BehaviorResult::halt(Some(Value::Int(2)))
        );
    }

    #[test]
    fn names_round_trip() {
        for behavior in [Behavior::Forward, Behavior::BreakOnPresent, Behavior::BreakOnAbsent] {
            assert_eq!(Behavior::from_name(behavior.name()).unwrap(), behavior);
        }
        assert!(Behavior::from_name("sometimes").is_err());
    }

    #[test]
    fn custom_behaviors_compare_by_identity() {
        let custom = Behavior::custom(|ctx| BehaviorResult::halt(ctx.current_value));
        assert_eq!(custom, custom.clone());
        assert_ne!(custom, Behavior::custom(|ctx| BehaviorResult::halt(ctx.current_value)));
        assert!(serde_json::to_string(&custom).is_err());
    }
}
