//! TAP - side-effecting observers
//!
//! [`tap`] reports every input/output pair of a handler. [`invalid`] reports
//! only present input the handler rejected. Neither changes the output nor
//! the control flow of the enclosing composition.

use std::sync::Arc;

use crate::foundation::{Handle, Handler, HandlerResult, Value};

type ObserveFn = dyn Fn(Option<&Value>, Option<&Value>) + Send + Sync;

/// Options for [`invalid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvalidOptions {
    /// Treat `""` input as absent, so it is never reported. Default `false`.
    pub empty_string_as_absent: bool,
}

impl InvalidOptions {
    /// Options with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `empty_string_as_absent`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_empty_string_as_absent(mut self, enabled: bool) -> Self {
        self.empty_string_as_absent = enabled;
        self
    }
}

/// Handler produced by [`tap`].
pub struct Tap {
    handler: Handler,
    observe: Arc<ObserveFn>,
}

impl Handle for Tap {
    fn handle(&self, input: Option<Value>) -> HandlerResult {
        let output = self.handler.call(input.clone())?;
        (self.observe)(input.as_ref(), output.as_ref());
        Ok(output)
    }
}

/// Runs `handler`, then calls `observe(input, output)`.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use nebula_pipe::prelude::*;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let log = Arc::clone(&seen);
/// let handler = tap(int(), move |input, output| {
///     log.lock().unwrap().push((input.cloned(), output.cloned()));
/// });
///
/// assert_eq!(handler.call(Some("4".into())).unwrap(), None);
/// assert_eq!(*seen.lock().unwrap(), vec![(Some(Value::from("4")), None)]);
/// ```
pub fn tap<F>(handler: Handler, observe: F) -> Handler
where
    F: Fn(Option<&Value>, Option<&Value>) + Send + Sync + 'static,
{
    Handler::new(Tap {
        handler,
        observe: Arc::new(observe),
    })
}

/// Calls `on_invalid(input)` when present input comes out of `handler`
/// absent.
///
/// With [`InvalidOptions::empty_string_as_absent`], `""` counts as absent
/// input and is not reported.
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use nebula_pipe::prelude::*;
///
/// let rejected = Arc::new(Mutex::new(Vec::new()));
/// let log = Arc::clone(&rejected);
/// let handler = invalid(
///     pipe([int(), min(1), max(8)]),
///     move |value| log.lock().unwrap().push(value.clone()),
///     InvalidOptions::default(),
/// );
///
/// handler.call(Some(Value::Int(1))).unwrap();
/// handler.call(Some(Value::Int(9))).unwrap();
/// handler.call(None).unwrap();
/// assert_eq!(*rejected.lock().unwrap(), vec![Value::Int(9)]);
/// ```
pub fn invalid<F>(handler: Handler, on_invalid: F, options: InvalidOptions) -> Handler
where
    F: Fn(&Value) + Send + Sync + 'static,
{
    tap(handler, move |input, output| {
        let Some(input) = input else { return };
        if output.is_some() {
            return;
        }
        if options.empty_string_as_absent && input.as_str() == Some("") {
            return;
        }
        tracing::trace!(kind = input.kind(), "handler rejected input");
        on_invalid(input);
    })
}
