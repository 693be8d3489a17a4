//! Length handlers
//!
//! Length is measured in characters for strings and in items for arrays.
//! Values without a length are absent.

crate::constraint! {
    /// Keeps strings and arrays of at least `min` characters or items.
    ///
    /// ```rust
    /// use nebula_pipe::prelude::*;
    ///
    /// assert_eq!(min_length(2).call(Some("ab".into())).unwrap(), Some("ab".into()));
    /// assert_eq!(min_length(2).call(Some("a".into())).unwrap(), None);
    /// assert_eq!(min_length(0).call(Some(Value::Int(10))).unwrap(), None);
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for value;
    keep(self, input) { input.length().is_some_and(|len| len >= self.min) }
    fn min_length(min: usize);
}

crate::constraint! {
    /// Keeps strings and arrays of at most `max` characters or items.
    ///
    /// ```rust
    /// use nebula_pipe::prelude::*;
    ///
    /// let short = max_length(3);
    /// assert_eq!(short.call(Some("héé".into())).unwrap(), Some("héé".into()));
    /// assert_eq!(short.call(Some("abcd".into())).unwrap(), None);
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for value;
    keep(self, input) { input.length().is_some_and(|len| len <= self.max) }
    fn max_length(max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Value;

    fn items(n: i64) -> Value {
        Value::array((0..n).map(|i| Some(Value::Int(i))))
    }

    #[test]
    fn arrays_count_items() {
        assert_eq!(min_length(2).call(Some(items(2))).unwrap(), Some(items(2)));
        assert_eq!(min_length(3).call(Some(items(2))).unwrap(), None);
        assert_eq!(max_length(2).call(Some(items(2))).unwrap(), Some(items(2)));
        assert_eq!(max_length(1).call(Some(items(2))).unwrap(), None);
    }

    #[test]
    fn strings_count_chars() {
        assert_eq!(max_length(1).call(Some("é".into())).unwrap(), Some("é".into()));
    }

    #[test]
    fn scalars_and_absence_are_absent() {
        assert_eq!(max_length(10).call(Some(Value::Bool(true))).unwrap(), None);
        assert_eq!(min_length(0).call(None).unwrap(), None);
    }
}
