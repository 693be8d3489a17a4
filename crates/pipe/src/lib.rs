//! # nebula-pipe
//!
//! Composable value-transformation pipelines for the Nebula workflow engine.
//!
//! A pipeline is built from small single-purpose [`Handler`]s that validate,
//! coerce or default a [`Value`]. Handlers signal "no usable value" by
//! returning `None` (absence) and are combined with combinators that decide,
//! through a [`Behavior`], whether execution continues after each step.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_pipe::prelude::*;
//!
//! // Coerce to an integer, then keep it only inside [2, 10).
//! let port_offset = pipe![int_with(IntOptions::default().with_try_convert(true)), min(2), max(10)];
//! assert_eq!(port_offset.call(Some("8".into())).unwrap(), Some(Value::Int(8)));
//! assert_eq!(port_offset.call(Some("11".into())).unwrap(), None);
//! ```
//!
//! ## Composition
//!
//! - [`pipe()`] / [`pipe_with`]: sequence under the default or an explicit behavior
//! - [`forward()`]: run every handler regardless of absence
//! - [`any`]: stop at the first present result
//! - [`all`]: stop at the first absent result
//!
//! ## Built-in Handlers
//!
//! - **Types**: [`string`](handlers::string), [`int`](handlers::int),
//!   [`float`](handlers::float), [`date`](handlers::date),
//!   [`boolean`](handlers::boolean), [`array`](handlers::array)
//! - **Constraints**: [`min`](handlers::min), [`max`](handlers::max),
//!   [`min_length`](handlers::min_length), [`max_length`](handlers::max_length),
//!   [`includes`](handlers::includes), [`regex`](handlers::regex)
//! - **Defaults**: [`def`](handlers::def)
//! - **Structure**: [`path`], [`project`]
//! - **Guards**: [`tap`], [`invalid`], [`throw_error`], [`required`]

pub mod combinators;
pub mod foundation;
pub mod handlers;
mod macros;
pub mod prelude;

pub use combinators::{
    Behavior, BehaviorContext, BehaviorResult, Field, InvalidOptions, PipeOptions, Raise, all,
    any, build, forward, invalid, path, pipe, pipe_with, project, required, tap, throw_error,
};
pub use foundation::{
    ConfigError, Defaults, Handle, Handler, HandlerError, HandlerResult, Value, defaults,
    reset_defaults, set_defaults, update_defaults,
};
