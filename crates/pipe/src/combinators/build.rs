//! BUILD - the validate / convert / refine template
//!
//! Every type and constraint handler is a [`Build`]: input that passes
//! `validate` is kept, anything else goes through `convert`; a present
//! result is then refined by `post_process`.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Handle, Handler, HandlerResult, Value};

type ValidateFn = dyn Fn(&Value) -> bool + Send + Sync;
type ConvertFn = dyn Fn(Option<Value>) -> Option<Value> + Send + Sync;

/// A handler assembled from a predicate, an optional converter and an
/// optional post-processing handler.
#[derive(Clone)]
pub struct Build {
    validate: Arc<ValidateFn>,
    convert: Option<Arc<ConvertFn>>,
    post_process: Option<Handler>,
}

impl Build {
    /// Creates a builder that keeps valid input and rejects everything else.
    pub fn new<V>(validate: V) -> Self
    where
        V: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            validate: Arc::new(validate),
            convert: None,
            post_process: None,
        }
    }

    /// Sets the converter tried on input that fails validation.
    ///
    /// The converter also receives absent input.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_convert<C>(mut self, convert: C) -> Self
    where
        C: Fn(Option<Value>) -> Option<Value> + Send + Sync + 'static,
    {
        self.convert = Some(Arc::new(convert));
        self
    }

    /// Sets the handler that refines a present value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_post_process(mut self, post_process: Handler) -> Self {
        self.post_process = Some(post_process);
        self
    }

    /// Finishes the builder.
    pub fn into_handler(self) -> Handler {
        Handler::new(self)
    }
}

impl Handle for Build {
    fn handle(&self, input: Option<Value>) -> HandlerResult {
        let value = match input {
            Some(value) if (self.validate)(&value) => Some(value),
            other => match &self.convert {
                Some(convert) => convert(other),
                None => None,
            },
        };
        match (value, &self.post_process) {
            (None, _) => Ok(None),
            (Some(value), Some(post_process)) => post_process.call(Some(value)),
            (Some(value), None) => Ok(Some(value)),
        }
    }
}

impl fmt::Debug for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Build")
            .field("validate", &"<function>")
            .field("convert", &self.convert.as_ref().map(|_| "<function>"))
            .field("post_process", &self.post_process)
            .finish()
    }
}

/// Builds a handler from `validate`, an optional `convert` and an optional
/// `post_process`.
///
/// - input passing `validate` is kept as is;
/// - otherwise `convert` runs (no converter means absence);
/// - an absent result is returned without running `post_process`.
///
/// # Examples
///
/// ```rust
/// use nebula_pipe::{Handler, Value, build};
///
/// let even = build(
///     |v| v.as_i64().is_some_and(|n| n % 2 == 0),
///     None,
///     Some(Handler::from_fn(|v| v.and_then(|v| v.as_i64()).map(|n| Value::Int(n / 2)))),
/// );
/// assert_eq!(even.call(Some(Value::Int(8))).unwrap(), Some(Value::Int(4)));
/// assert_eq!(even.call(Some(Value::Int(7))).unwrap(), None);
/// ```
pub fn build<V>(
    validate: V,
    convert: Option<Box<ConvertFn>>,
    post_process: Option<Handler>,
) -> Handler
where
    V: Fn(&Value) -> bool + Send + Sync + 'static,
{
    let mut builder = Build::new(validate);
    if let Some(convert) = convert {
        builder.convert = Some(Arc::from(convert));
    }
    builder.post_process = post_process;
    builder.into_handler()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn valid_input_skips_convert() {
        let handler = Build::new(|v| v.is_integer())
            .with_convert(|_| Some(Value::Int(-1)))
            .into_handler();
        assert_eq!(handler.call(Some(Value::Int(3))).unwrap(), Some(Value::Int(3)));
        assert_eq!(handler.call(Some("x".into())).unwrap(), Some(Value::Int(-1)));
    }

    #[test]
    fn absent_input_goes_to_convert() {
        let handler = Build::new(|_| true)
            .with_convert(|v| v.or(Some(Value::Int(0))))
            .into_handler();
        assert_eq!(handler.call(None).unwrap(), Some(Value::Int(0)));
    }

    #[test]
    fn absent_result_skips_post_process() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);
        let handler = Build::new(|v| v.is_integer())
            .with_post_process(Handler::from_fn(move |v| {
                flag.store(true, Ordering::SeqCst);
                v
            }))
            .into_handler();
        assert_eq!(handler.call(Some("x".into())).unwrap(), None);
        assert!(!called.load(Ordering::SeqCst));
    }

    #[test]
    fn build_function_without_convert() {
        let handler = build(|v| v.is_number(), None, None);
        assert_eq!(handler.call(Some(Value::Float(1.5))).unwrap(), Some(Value::Float(1.5)));
        assert_eq!(handler.call(Some("1.5".into())).unwrap(), None);
    }
}
