//! PIPE combinator - sequencing under a behavior
//!
//! [`pipe`] runs handlers left to right, each receiving the value carried by
//! the previous step. After every step the composition's [`Behavior`]
//! decides what to carry and whether to go on.
//!
//! [`forward`], [`any`] and [`all`] are `pipe` with a fixed behavior.
//!
//! # Examples
//!
//! ```rust
//! use nebula_pipe::prelude::*;
//!
//! // all: a chain of checks, the first absence aborts
//! let range = all([min(2), max(10)]);
//! assert_eq!(pipe([int(), range.clone()]).call(Some(Value::Int(8))).unwrap(), Some(Value::Int(8)));
//! assert_eq!(pipe([int(), range]).call(Some(Value::Int(11))).unwrap(), None);
//!
//! // forward: every handler runs, absence included
//! let with_default = forward([int(), def(2)]);
//! assert_eq!(with_default.call(Some("8".into())).unwrap(), Some(Value::Int(2)));
//! ```

use smallvec::SmallVec;

use crate::combinators::{Behavior, BehaviorContext, BehaviorResult};
use crate::foundation::{Defaults, Handle, Handler, HandlerResult, Value, defaults};

// ============================================================================
// OPTIONS
// ============================================================================

/// Options for [`pipe_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipeOptions {
    /// Behavior of the composition. Falls back to the registry default.
    pub behavior: Option<Behavior>,
}

impl PipeOptions {
    /// Options with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the behavior.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = Some(behavior);
        self
    }
}

// ============================================================================
// PIPE
// ============================================================================

/// A composition of two or more handlers under a behavior.
///
/// Built through [`pipe`] and friends, which hand out a [`Handler`]; zero
/// and one handler compositions never allocate a `Pipe`.
#[derive(Debug, Clone)]
pub struct Pipe {
    handlers: SmallVec<[Handler; 4]>,
    behavior: Behavior,
}

impl Pipe {
    /// Returns the composed handlers.
    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Returns the behavior.
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }
}

impl Handle for Pipe {
    fn handle(&self, input: Option<Value>) -> HandlerResult {
        let mut result = BehaviorResult::proceed(input);
        for (handler_index, handler) in self.handlers.iter().enumerate() {
            let prev_value = result.value;
            let current_value = handler.call(prev_value.clone())?;
            result = self.behavior.apply(BehaviorContext {
                current_value,
                prev_value,
                handler_index,
            });
            if !result.next {
                tracing::trace!(
                    handler_index,
                    behavior = self.behavior.name(),
                    present = result.value.is_some(),
                    "pipe halted"
                );
                break;
            }
        }
        Ok(result.value)
    }
}

fn compose<I>(behavior: Behavior, handlers: I) -> Handler
where
    I: IntoIterator<Item = Handler>,
{
    let mut handlers: SmallVec<[Handler; 4]> = handlers.into_iter().collect();
    match handlers.len() {
        0 => Handler::identity(),
        1 => handlers.swap_remove(0),
        _ => Handler::new(Pipe { handlers, behavior }),
    }
}

impl Defaults {
    /// [`pipe`] using these defaults.
    pub fn pipe<I>(&self, handlers: I) -> Handler
    where
        I: IntoIterator<Item = Handler>,
    {
        compose(self.pipe_behavior(), handlers)
    }

    /// [`pipe_with`] using these defaults.
    pub fn pipe_with<I>(&self, options: PipeOptions, handlers: I) -> Handler
    where
        I: IntoIterator<Item = Handler>,
    {
        let behavior = options.behavior.unwrap_or_else(|| self.pipe_behavior());
        compose(behavior, handlers)
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// Composes handlers under the default behavior.
///
/// The default is the registry's `pipe.behavior`, [`Behavior::BreakOnAbsent`]
/// unless reconfigured (and also when it was configured away).
///
/// - no handlers: the identity handler
/// - one handler: that handler itself
/// - otherwise: a composition that runs handlers left to right until the
///   behavior says stop
///
/// # Examples
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// assert_eq!(pipe([]).call(Some(Value::Int(8))).unwrap(), Some(Value::Int(8)));
///
/// let checked = pipe([int(), min(2), max(10)]);
/// assert_eq!(checked.call(Some(Value::Int(8))).unwrap(), Some(Value::Int(8)));
/// assert_eq!(checked.call(Some(Value::Int(11))).unwrap(), None);
/// ```
pub fn pipe<I>(handlers: I) -> Handler
where
    I: IntoIterator<Item = Handler>,
{
    defaults().pipe(handlers)
}

/// Composes handlers under the behavior given in `options`.
///
/// An unset behavior falls back to the registry default, then to
/// [`Behavior::BreakOnAbsent`].
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let options = PipeOptions::new().with_behavior(Behavior::BreakOnPresent);
/// let first = pipe_with(options, [int(), string(), def(2)]);
/// assert_eq!(first.call(Some("8".into())).unwrap(), Some("8".into()));
/// ```
pub fn pipe_with<I>(options: PipeOptions, handlers: I) -> Handler
where
    I: IntoIterator<Item = Handler>,
{
    defaults().pipe_with(options, handlers)
}

/// Runs every handler, each on the previous output, absence included.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let add_two = Handler::from_fn(|v| v.and_then(|v| v.as_i64()).map(|n| Value::Int(n + 2)));
/// let handler = forward([int(), def(2), add_two]);
/// assert_eq!(handler.call(Some("8".into())).unwrap(), Some(Value::Int(4)));
/// assert_eq!(handler.call(Some(Value::Int(8))).unwrap(), Some(Value::Int(10)));
/// ```
pub fn forward<I>(handlers: I) -> Handler
where
    I: IntoIterator<Item = Handler>,
{
    compose(Behavior::Forward, handlers)
}

/// Returns the first present result.
///
/// An absent result leaves the carried value as it was, so later handlers
/// see the last present value, typically the original input.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let prefix = Handler::from_fn(|v| v.map(|v| Value::String(format!("#{v}"))));
/// let handler = any([int(), prefix]);
/// assert_eq!(handler.call(Some("8".into())).unwrap(), Some("#8".into()));
/// assert_eq!(handler.call(Some(Value::Int(8))).unwrap(), Some(Value::Int(8)));
/// ```
pub fn any<I>(handlers: I) -> Handler
where
    I: IntoIterator<Item = Handler>,
{
    compose(Behavior::BreakOnPresent, handlers)
}

/// Runs handlers until one yields absence.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// assert_eq!(all([int(), min(1)]).call(Some(Value::Int(8))).unwrap(), Some(Value::Int(8)));
/// assert_eq!(all([int(), min(1), max(6)]).call(Some(Value::Int(8))).unwrap(), None);
/// ```
pub fn all<I>(handlers: I) -> Handler
where
    I: IntoIterator<Item = Handler>,
{
    compose(Behavior::BreakOnAbsent, handlers)
}
