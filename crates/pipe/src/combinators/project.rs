//! PROJECT - builds a new object from per-field handlers
//!
//! Every [`Field`] runs its handler on the whole input. Fields are either
//! unconditional or gated by a predicate over the unconditional results.
//!
//! [`Field::at`] halts on a missing path before its handler runs. A field
//! that defaults a missing key composes the path itself under
//! [`forward`](crate::forward()).
//!
//! # Examples
//!
//! ```rust
//! use nebula_pipe::prelude::*;
//! use serde_json::json;
//!
//! let user = project([
//!     ("id", Field::at(["user_id"], int())),
//!     ("name", Field::at(["profile", "name"], string())),
//!     (
//!         "greeting",
//!         Field::new(forward([path(["greeting"]), def("hello")]))
//!             .on(|processed, _| processed.get("name").is_some_and(Option::is_some)),
//!     ),
//! ]);
//!
//! let input = Value::from_json(json!({ "user_id": 7, "profile": { "name": " Ann " } }));
//! let output = user.call(input).unwrap().unwrap();
//! assert_eq!(output.to_json(), json!({ "id": 7, "name": "Ann", "greeting": "hello" }));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::combinators::{path, pipe};
use crate::foundation::{Handle, Handler, HandlerResult, Object, Value};

type GateFn = dyn Fn(&Object, Option<&Value>) -> bool + Send + Sync;

// ============================================================================
// FIELD
// ============================================================================

/// One output key of a [`project`].
#[derive(Clone)]
pub struct Field {
    handler: Handler,
    gate: Option<Arc<GateFn>>,
}

impl Field {
    /// An unconditional field computed by `handler` from the whole input.
    pub fn new(handler: Handler) -> Self {
        Self {
            handler,
            gate: None,
        }
    }

    /// A field reading the value at `keys` and passing it through `handler`.
    pub fn at<I, K>(keys: I, handler: Handler) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::new(pipe([path(keys), handler]))
    }

    /// A field copying the input's `key` as is.
    pub fn key(key: impl Into<String>) -> Self {
        Self::new(path([key.into()]))
    }

    /// Gates the field on `predicate(processed, input)`.
    ///
    /// `processed` holds the results of the unconditional fields only. When
    /// the predicate is false the field is absent in the output.
    #[must_use = "builder methods must be chained or built"]
    pub fn on<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Object, Option<&Value>) -> bool + Send + Sync + 'static,
    {
        self.gate = Some(Arc::new(predicate));
        self
    }

    /// Returns `true` when the field has a gate.
    pub fn is_gated(&self) -> bool {
        self.gate.is_some()
    }
}

impl From<Handler> for Field {
    fn from(handler: Handler) -> Self {
        Self::new(handler)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("handler", &self.handler)
            .field("gated", &self.is_gated())
            .finish()
    }
}

// ============================================================================
// PROJECT
// ============================================================================

struct Gated {
    key: String,
    handler: Handler,
    gate: Arc<GateFn>,
}

/// Handler produced by [`project`].
pub struct Project {
    unconditional: Vec<(String, Handler)>,
    gated: Vec<Gated>,
}

impl Handle for Project {
    fn handle(&self, input: Option<Value>) -> HandlerResult {
        let mut processed = Object::with_capacity(self.unconditional.len() + self.gated.len());
        for (key, handler) in &self.unconditional {
            processed.insert(key.clone(), handler.call(input.clone())?);
        }

        let mut gated = Vec::with_capacity(self.gated.len());
        for field in &self.gated {
            let value = if (field.gate)(&processed, input.as_ref()) {
                field.handler.call(input.clone())?
            } else {
                None
            };
            gated.push((field.key.clone(), value));
        }
        processed.extend(gated);

        Ok(Some(Value::Object(processed)))
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field(
                "unconditional",
                &self.unconditional.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .field("gated", &self.gated.iter().map(|g| &g.key).collect::<Vec<_>>())
            .finish()
    }
}

/// Builds an object from `fields`.
///
/// Unconditional fields run first, in order. Gated fields run afterwards
/// and only when their gate accepts the unconditional results; otherwise
/// their key is present with an absent value. The output is always an
/// object, absent input included.
///
/// ```rust
/// use nebula_pipe::prelude::*;
/// use serde_json::json;
///
/// let handler = project([("a", Field::at(["prop1"], int()))]);
/// let output = handler.call(Value::from_json(json!({ "prop1": 1 }))).unwrap();
/// assert_eq!(to_json(&output), json!({ "a": 1 }));
/// ```
pub fn project<I, K>(fields: I) -> Handler
where
    I: IntoIterator<Item = (K, Field)>,
    K: Into<String>,
{
    let mut unconditional = Vec::new();
    let mut gated = Vec::new();
    for (key, field) in fields {
        let key = key.into();
        match field.gate {
            Some(gate) => gated.push(Gated {
                key,
                handler: field.handler,
                gate,
            }),
            None => unconditional.push((key, field.handler)),
        }
    }
    Handler::new(Project {
        unconditional,
        gated,
    })
}
