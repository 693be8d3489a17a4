//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_pipe::prelude::*;` import that brings in
//! the value model, every handler constructor, the combinators and the
//! composition macros.
//!
//! # Examples
//!
//! ```rust
//! use nebula_pipe::prelude::*;
//!
//! let age = pipe![int_with(IntOptions::new().with_try_convert(true)), min(18), max(130)];
//! let nickname = forward![pipe![string(), min_length(1)], def("anonymous")];
//!
//! assert_eq!(age.call(Some("42".into())).unwrap(), Some(Value::Int(42)));
//! assert_eq!(nickname.call(Some("  ".into())).unwrap(), Some("anonymous".into()));
//! ```

// ============================================================================
// FOUNDATION: Values, handlers, errors, defaults
// ============================================================================

pub use crate::foundation::{
    Array, ConfigError, Defaults, Handle, Handler, HandlerError, HandlerResult, Object, Value,
    defaults, reset_defaults, set_defaults, to_json, update_defaults,
};

// ============================================================================
// HANDLERS: All built-in handlers and their options
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::handlers::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Behavior, BehaviorContext, BehaviorResult, Field, InvalidOptions, PipeOptions, Raise, all,
    any, build, invalid, path, pipe_with, project, required, tap, throw_error,
};

// ============================================================================
// MACROS
// ============================================================================

// `pipe` and `forward` name both the function and the macro.
pub use crate::{all_of, any_of, forward, pipe};
