//! Range handlers
//!
//! Bounds compare with [`Value`]'s ordering: numbers numerically (integers
//! and floats mix), strings lexicographically, dates chronologically.
//! Values that do not order against the bound are absent.

use crate::foundation::Value;

crate::constraint! {
    /// Keeps values greater than or equal to `min`.
    ///
    /// ```rust
    /// use nebula_pipe::prelude::*;
    ///
    /// assert_eq!(min(10).call(Some(Value::Int(9))).unwrap(), None);
    /// assert_eq!(min(10).call(Some(Value::Int(14))).unwrap(), Some(Value::Int(14)));
    /// assert_eq!(min(10).call(Some(Value::Float(10.0))).unwrap(), Some(Value::Float(10.0)));
    /// ```
    #[derive(PartialEq)]
    pub Min { min: Value } for value;
    keep(self, input) { *input >= self.min }
    new(min: impl Into<Value>) { Self { min: min.into() } }
    fn min(min: impl Into<Value>);
}

crate::constraint! {
    /// Keeps values strictly less than `max`.
    ///
    /// ```rust
    /// use nebula_pipe::prelude::*;
    ///
    /// assert_eq!(max(10).call(Some(Value::Int(14))).unwrap(), None);
    /// assert_eq!(max(10).call(Some(Value::Int(10))).unwrap(), None);
    /// assert_eq!(max(10).call(Some(Value::Int(9))).unwrap(), Some(Value::Int(9)));
    /// ```
    #[derive(PartialEq)]
    pub Max { max: Value } for value;
    keep(self, input) { *input < self.max }
    new(max: impl Into<Value>) { Self { max: max.into() } }
    fn max(max: impl Into<Value>);
}
