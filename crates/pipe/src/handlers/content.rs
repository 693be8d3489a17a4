//! Membership handler

use crate::foundation::Value;

crate::constraint! {
    /// Keeps values contained in `allowed`.
    ///
    /// With no set every present value passes. Membership uses [`Value`]
    /// equality, so `1` and `1.0` are the same member.
    ///
    /// ```rust
    /// use nebula_pipe::prelude::*;
    ///
    /// let level = includes(Some(vec!["low".into(), "high".into()]));
    /// assert_eq!(level.call(Some("low".into())).unwrap(), Some("low".into()));
    /// assert_eq!(level.call(Some("mid".into())).unwrap(), None);
    ///
    /// let anything = includes(None);
    /// assert_eq!(anything.call(Some("mid".into())).unwrap(), Some("mid".into()));
    /// ```
    #[derive(PartialEq)]
    pub Includes { allowed: Option<Vec<Value>> } for value;
    keep(self, input) { self.allowed.as_ref().is_none_or(|set| set.contains(input)) }
    fn includes(allowed: Option<Vec<Value>>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_members_compare_by_value() {
        let handler = includes(Some(vec![Value::Int(1), Value::Int(2)]));
        assert_eq!(handler.call(Some(Value::Float(1.0))).unwrap(), Some(Value::Float(1.0)));
        assert_eq!(handler.call(Some(Value::Int(3))).unwrap(), None);
    }

    #[test]
    fn empty_set_rejects_everything() {
        assert_eq!(includes(Some(Vec::new())).call(Some(Value::Int(1))).unwrap(), None);
    }

    #[test]
    fn absent_is_absent_without_a_set() {
        assert_eq!(includes(None).call(None).unwrap(), None);
    }
}
