//! Default value handler

use crate::foundation::utils::ensure;
use crate::foundation::{Handler, Value};

/// Replaces absent input with `default`; present input passes unchanged.
///
/// Runs unconditionally: no validation, no conversion.
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// assert_eq!(def(2).call(None).unwrap(), Some(Value::Int(2)));
/// assert_eq!(def(2).call(Some("x".into())).unwrap(), Some("x".into()));
/// assert_eq!(pipe([int(), def(0)]).call(Some("x".into())).unwrap(), None);
/// ```
pub fn def(default: impl Into<Value>) -> Handler {
    let default = default.into();
    Handler::from_fn(move |input| ensure(input, Some(default.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_values_are_present() {
        assert_eq!(def(1).call(Some(Value::Int(0))).unwrap(), Some(Value::Int(0)));
        assert_eq!(def(true).call(Some(Value::Bool(false))).unwrap(), Some(Value::Bool(false)));
        assert_eq!(def("d").call(Some("".into())).unwrap(), Some("".into()));
    }
}
