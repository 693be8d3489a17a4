//! GUARDS - the only handlers that raise
//!
//! Every other handler reports failure as absence. [`throw_error`] turns a
//! matching value into a [`HandlerError`]; the error then propagates out of
//! every enclosing composition.

use std::fmt;
use std::sync::Arc;

use crate::foundation::utils::is_absent;
use crate::foundation::{Handle, Handler, HandlerError, HandlerResult, Value};

type ErrorFactory = dyn Fn(Option<&Value>) -> HandlerError + Send + Sync;
type MatchFn = dyn Fn(Option<&Value>) -> bool + Send + Sync;

/// The error a guard raises.
#[derive(Clone)]
pub enum Raise {
    /// Always the same error.
    Error(HandlerError),
    /// An error built from the offending value.
    Factory(Arc<ErrorFactory>),
}

impl Raise {
    /// Raises errors built by `factory`.
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(Option<&Value>) -> HandlerError + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(factory))
    }

    /// Produces the error for `value`.
    #[must_use]
    pub fn raise(&self, value: Option<&Value>) -> HandlerError {
        match self {
            Self::Error(error) => error.clone(),
            Self::Factory(factory) => factory(value),
        }
    }
}

impl From<HandlerError> for Raise {
    fn from(error: HandlerError) -> Self {
        Self::Error(error)
    }
}

impl fmt::Debug for Raise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Factory(_) => f.write_str("Factory(<function>)"),
        }
    }
}

/// Handler produced by [`throw_error`].
pub struct ThrowError {
    raise: Raise,
    matcher: Arc<MatchFn>,
}

impl Handle for ThrowError {
    fn handle(&self, input: Option<Value>) -> HandlerResult {
        if (self.matcher)(input.as_ref()) {
            let error = self.raise.raise(input.as_ref());
            tracing::debug!(code = %error.code, "guard raised");
            return Err(error);
        }
        Ok(input)
    }
}

/// Raises when `matcher` accepts the value, passes it through otherwise.
///
/// # Examples
///
/// ```rust
/// use nebula_pipe::{HandlerError, Value, throw_error};
///
/// let one = HandlerError::new("one", "one is not allowed");
/// let guard = throw_error(one.clone(), |v| v.and_then(Value::as_i64) == Some(1));
///
/// assert_eq!(guard.call(Some(Value::Int(1))).unwrap_err(), one);
/// assert_eq!(guard.call(Some(Value::Int(2))).unwrap(), Some(Value::Int(2)));
/// ```
pub fn throw_error<R, M>(raise: R, matcher: M) -> Handler
where
    R: Into<Raise>,
    M: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
{
    Handler::new(ThrowError {
        raise: raise.into(),
        matcher: Arc::new(matcher),
    })
}

/// Raises on absent input.
///
/// Under the default [`Behavior::BreakOnAbsent`](crate::Behavior) a pipe
/// halts before the guard once an earlier handler yields absence; use
/// [`forward`](crate::forward()) to let the guard see it.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let port = forward([int(), required(HandlerError::required().with_field("port"))]);
/// assert_eq!(port.call(Some(Value::Int(80))).unwrap(), Some(Value::Int(80)));
/// assert_eq!(port.call(Some("80".into())).unwrap_err().code, "required");
/// ```
pub fn required<R>(raise: R) -> Handler
where
    R: Into<Raise>,
{
    throw_error(raise, is_absent)
}
