//! Core handler trait and the shared [`Handler`] function object.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{HandlerError, Value};

/// Result of running a handler.
///
/// `Ok(None)` is absence, the soft failure every handler may report.
/// `Err` is reserved for guards that raise on purpose.
pub type HandlerResult = Result<Option<Value>, HandlerError>;

// ============================================================================
// CORE HANDLER TRAIT
// ============================================================================

/// The trait every pipeline stage implements.
///
/// A handler maps one possibly absent value to one possibly absent value.
/// It must not fail for unexpected input shapes; returning `Ok(None)` is the
/// way to reject a value.
///
/// The trait is implemented for every `Fn(Option<Value>) -> HandlerResult`
/// closure, so structs are only needed for stages that carry state.
///
/// # Examples
///
/// ```rust
/// use nebula_pipe::{Handle, Handler, HandlerResult, Value};
///
/// struct Negate;
///
/// impl Handle for Negate {
///     fn handle(&self, input: Option<Value>) -> HandlerResult {
///         Ok(input.and_then(|v| v.as_bool()).map(|b| Value::Bool(!b)))
///     }
/// }
///
/// let negate = Handler::new(Negate);
/// assert_eq!(negate.call(Some(Value::Bool(true))).unwrap(), Some(Value::Bool(false)));
/// ```
pub trait Handle: Send + Sync {
    /// Runs the handler against `input`.
    fn handle(&self, input: Option<Value>) -> HandlerResult;
}

impl<F> Handle for F
where
    F: Fn(Option<Value>) -> HandlerResult + Send + Sync,
{
    fn handle(&self, input: Option<Value>) -> HandlerResult {
        self(input)
    }
}

// ============================================================================
// HANDLER
// ============================================================================

/// A shared, immutable, type-erased handler.
///
/// Cloning is cheap (an `Arc` bump), so the same handler can appear in many
/// compositions. Every constructor in this crate returns a `Handler`.
#[derive(Clone)]
pub struct Handler {
    inner: Arc<dyn Handle>,
}

impl Handler {
    /// Wraps any [`Handle`] implementation.
    pub fn new<H>(handle: H) -> Self
    where
        H: Handle + 'static,
    {
        Self {
            inner: Arc::new(handle),
        }
    }

    /// Wraps a closure that may raise.
    pub fn try_from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<Value>) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(f)
    }

    /// Wraps a closure that never raises.
    ///
    /// ```rust
    /// use nebula_pipe::{Handler, Value};
    ///
    /// let prefix = Handler::from_fn(|v| v.map(|v| Value::String(format!("#{v}"))));
    /// assert_eq!(prefix.call(Some("8".into())).unwrap(), Some("#8".into()));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<Value>) -> Option<Value> + Send + Sync + 'static,
    {
        Self::new(move |input: Option<Value>| -> HandlerResult { Ok(f(input)) })
    }

    /// The handler that returns its input unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::try_from_fn(Ok)
    }

    /// Runs the handler.
    pub fn call(&self, input: Option<Value>) -> HandlerResult {
        self.inner.handle(input)
    }

    /// Sequences `next` after `self` under the default behavior.
    ///
    /// Shorthand for `pipe([self, next])`.
    #[must_use]
    pub fn then(self, next: Handler) -> Handler {
        crate::pipe([self, next])
    }

    /// Falls back to `fallback` when `self` yields absence.
    ///
    /// Shorthand for `any([self, fallback])`.
    #[must_use]
    pub fn or(self, fallback: Handler) -> Handler {
        crate::any([self, fallback])
    }

    /// Returns `true` when both handles point to the same handler.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("inner", &"<function>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_input() {
        let id = Handler::identity();
        assert_eq!(id.call(Some(Value::Int(3))).unwrap(), Some(Value::Int(3)));
        assert_eq!(id.call(None).unwrap(), None);
    }

    #[test]
    fn clones_share_the_handler() {
        let id = Handler::identity();
        let copy = id.clone();
        assert!(id.ptr_eq(&copy));
        assert!(!id.ptr_eq(&Handler::identity()));
    }

    #[test]
    fn try_from_fn_propagates_errors() {
        let fail = Handler::try_from_fn(|_| Err(HandlerError::new("nope", "always fails")));
        assert_eq!(fail.call(None).unwrap_err().code, "nope");
    }
}
