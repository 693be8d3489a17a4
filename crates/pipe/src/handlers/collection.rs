//! Array handler
//!
//! [`array`] keeps arrays and maps every item through a composition of
//! item handlers. Item handlers run independently per item: an absent item
//! result never stops the other items.

use crate::combinators::Build;
use crate::foundation::utils::is_array;
use crate::foundation::{Array, Defaults, Handler, Value, defaults};

/// Options for [`array_with`]. Unset fields use the registry defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayOptions {
    /// Wrap a non-array value as `[value]`; absent becomes `[]`.
    pub try_convert: Option<bool>,
    /// Drop absent items after mapping.
    pub remove_absent: Option<bool>,
}

impl ArrayOptions {
    /// Options with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `try_convert`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_try_convert(mut self, try_convert: bool) -> Self {
        self.try_convert = Some(try_convert);
        self
    }

    /// Sets `remove_absent`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_remove_absent(mut self, remove_absent: bool) -> Self {
        self.remove_absent = Some(remove_absent);
        self
    }
}

fn wrap(input: Option<Value>) -> Option<Value> {
    Some(Value::Array(input.map_or_else(Vec::new, |value| vec![Some(value)])))
}

fn map_items(items: Handler, remove_absent: bool) -> Handler {
    Handler::try_from_fn(move |input| {
        let values = match input {
            Some(Value::Array(values)) => values,
            other => return Ok(other),
        };
        let mut mapped = Array::with_capacity(values.len());
        for value in values {
            let output = items.call(value)?;
            if output.is_some() || !remove_absent {
                mapped.push(output);
            }
        }
        Ok(Some(Value::Array(mapped)))
    })
}

impl Defaults {
    /// [`array`] using these defaults.
    pub fn array<I>(&self, handlers: I) -> Handler
    where
        I: IntoIterator<Item = Handler>,
    {
        self.array_with(ArrayOptions::default(), handlers)
    }

    /// [`array_with`] using these defaults.
    pub fn array_with<I>(&self, options: ArrayOptions, handlers: I) -> Handler
    where
        I: IntoIterator<Item = Handler>,
    {
        let remove_absent = options.remove_absent.unwrap_or(self.array.remove_absent);
        let mut builder =
            Build::new(is_array).with_post_process(map_items(self.pipe(handlers), remove_absent));
        if options.try_convert.unwrap_or(self.array.try_convert) {
            builder = builder.with_convert(wrap);
        }
        builder.into_handler()
    }
}

/// Keeps arrays, mapping each item through `pipe(handlers)`.
///
/// No handlers keeps the items as they are.
///
/// ```rust
/// use nebula_pipe::prelude::*;
/// use serde_json::json;
///
/// let numbers = array([int()]);
/// let output = numbers.call(Value::from_json(json!([1, 2, null, "4"]))).unwrap();
/// assert_eq!(to_json(&output), json!([1, 2, null, null]));
/// assert_eq!(numbers.call(Some(Value::Int(1))).unwrap(), None);
/// ```
pub fn array<I>(handlers: I) -> Handler
where
    I: IntoIterator<Item = Handler>,
{
    defaults().array(handlers)
}

/// Keeps arrays, with explicit options.
///
/// ```rust
/// use nebula_pipe::prelude::*;
/// use serde_json::json;
///
/// let options = ArrayOptions::new().with_remove_absent(true);
/// let numbers = array_with(options, [int_with(IntOptions::new().with_try_convert(true))]);
/// let output = numbers.call(Value::from_json(json!([1, 2, null, 4, "5", "s", 8]))).unwrap();
/// assert_eq!(to_json(&output), json!([1, 2, 4, 5, 8]));
///
/// let wrapped = array_with(ArrayOptions::new().with_try_convert(true), []);
/// assert_eq!(to_json(&wrapped.call(Some(Value::Int(1))).unwrap()), json!([1]));
/// assert_eq!(to_json(&wrapped.call(None).unwrap()), json!([]));
/// ```
pub fn array_with<I>(options: ArrayOptions, handlers: I) -> Handler
where
    I: IntoIterator<Item = Handler>,
{
    defaults().array_with(options, handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{Behavior, PipeOptions, pipe_with};
    use crate::foundation::{HandlerError, to_json};
    use crate::handlers::{IntOptions, def, int_with};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn input() -> Option<Value> {
        Value::from_json(json!([1, 2, null, 4, "5", "s", 8]))
    }

    fn lenient_int() -> Handler {
        int_with(IntOptions::new().with_try_convert(true))
    }

    #[test]
    fn keeps_absent_items_by_default() {
        let output = Defaults::default().array([lenient_int()]).call(input()).unwrap();
        assert_eq!(to_json(&output), json!([1, 2, null, 4, 5, null, 8]));
    }

    #[test]
    fn forward_item_pipeline_fills_defaults() {
        let items = pipe_with(
            PipeOptions::new().with_behavior(Behavior::Forward),
            [lenient_int(), def(100)],
        );
        let handler = Defaults::default()
            .array_with(ArrayOptions::new().with_remove_absent(true), [items]);
        let output = handler.call(input()).unwrap();
        assert_eq!(to_json(&output), json!([1, 2, 100, 4, 5, 100, 8]));
    }

    #[test]
    fn registry_remove_absent() {
        let mut context = Defaults::default();
        context.array.remove_absent = true;
        let output = context.array(Vec::new()).call(input()).unwrap();
        assert_eq!(to_json(&output), json!([1, 2, 4, "5", "s", 8]));
    }

    #[test]
    fn item_errors_propagate() {
        let failing = Handler::try_from_fn(|_| Err(HandlerError::new("item", "bad item")));
        let handler = Defaults::default().array([failing]);
        assert_eq!(handler.call(input()).unwrap_err().code, "item");
    }

    #[test]
    fn empty_array_stays_empty() {
        let handler = Defaults::default().array([lenient_int()]);
        assert_eq!(to_json(&handler.call(Value::from_json(json!([]))).unwrap()), json!([]));
    }
}
