//! Combinators that compose and wrap handlers
//!
//! - **Sequencing**: [`pipe`], [`pipe_with`], [`forward`], [`any`], [`all`]
//!   under a [`Behavior`]
//! - **Templates**: [`build`] (validate / convert / refine)
//! - **Structure**: [`path`], [`project`]
//! - **Observation**: [`tap`], [`invalid`]
//! - **Guards**: [`throw_error`], [`required`]

pub mod behavior;
pub mod build;
pub mod guard;
pub mod path;
pub mod pipe;
pub mod project;
pub mod tap;

pub use behavior::{Behavior, BehaviorContext, BehaviorResult};
pub use build::{Build, build};
pub use guard::{Raise, required, throw_error};
pub use path::{Path, path};
pub use pipe::{Pipe, PipeOptions, all, any, forward, pipe, pipe_with};
pub use project::{Field, project};
pub use tap::{InvalidOptions, invalid, tap};
