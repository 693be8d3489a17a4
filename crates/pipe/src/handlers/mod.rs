//! Built-in handlers
//!
//! Leaf handlers built on the [`build`](crate::build) template. Type
//! handlers keep values of their type and optionally convert the rest;
//! constraint handlers keep or reject without converting.
//!
//! # Categories
//!
//! - **Types**: string, int, float, date, boolean, array
//! - **Constraints**: range (min, max), length, pattern, membership
//! - **Defaults**: def
//!
//! Every type handler comes as a pair: `int()` reads the global defaults
//! registry, `int_with(IntOptions)` overrides single fields. The same
//! constructors exist as methods on [`Defaults`](crate::Defaults) for an
//! explicit defaults context.
//!
//! # Examples
//!
//! ```rust
//! use nebula_pipe::prelude::*;
//!
//! let price = float_with(FloatOptions::new().with_try_convert(true).with_fixed(2));
//! assert_eq!(price.call(Some("19.999 EUR".into())).unwrap(), Some(Value::Float(20.0)));
//!
//! let tags = array_with(ArrayOptions::new().with_try_convert(true), [string(), min_length(1)]);
//! assert_eq!(
//!     to_json(&tags.call(Some(" rust ".into())).unwrap()),
//!     serde_json::json!(["rust"]),
//! );
//! ```

// Type handlers
pub mod collection;
pub mod datetime;
pub mod logical;
pub mod number;
pub mod text;

// Constraint handlers
pub mod content;
pub mod length;
pub mod pattern;
pub mod range;

// Defaults
pub mod nullable;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use collection::{ArrayOptions, array, array_with};
pub use content::{Includes, includes};
pub use datetime::{DateOptions, date, date_with};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use logical::{BooleanOptions, boolean, boolean_with};
pub use nullable::def;
pub use number::{FloatOptions, IntOptions, float, float_with, int, int_with};
pub use pattern::{regex, regex_str};
pub use range::{Max, Min, max, min};
pub use text::{StringOptions, string, string_with};
