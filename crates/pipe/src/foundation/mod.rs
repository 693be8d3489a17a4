//! Core types shared by every handler
//!
//! - **Values**: [`Value`], where `None` is absence
//! - **Traits**: [`Handle`], and the shared function object [`Handler`]
//! - **Errors**: [`HandlerError`] (raised by guards), [`ConfigError`] (construction)
//! - **Defaults**: the [`Defaults`] registry read at construction time
//! - **Utilities**: absence predicates and safe conversions in [`utils`]

pub mod defaults;
pub mod error;
pub mod traits;
pub mod utils;
pub mod value;

pub use defaults::{
    ArrayDefaults, BooleanDefaults, DateDefaults, Defaults, FloatDefaults, IntDefaults,
    PipeDefaults, StringDefaults, defaults, reset_defaults, set_defaults, update_defaults,
};
pub use error::{ConfigError, HandlerError};
pub use traits::{Handle, Handler, HandlerResult};
pub use value::{Array, Object, Value, to_json};
