//! PATH - nested property extraction

use crate::foundation::{Handle, Handler, HandlerResult, Value};

/// Walks an object graph by successive key lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    keys: Vec<String>,
}

impl Path {
    /// Returns the keys walked, outermost first.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl Handle for Path {
    fn handle(&self, input: Option<Value>) -> HandlerResult {
        let mut current = input;
        for key in &self.keys {
            current = match current {
                Some(value) => value.get(key).cloned(),
                None => return Ok(None),
            };
        }
        Ok(current)
    }
}

/// Extracts a nested value.
///
/// Each key is looked up on the current value (objects by key, arrays by
/// numeric index). The walk stops with absence at the first missing link.
/// No keys means the input itself.
///
/// # Examples
///
/// ```rust
/// use nebula_pipe::{Value, path};
/// use serde_json::json;
///
/// let input = Value::from_json(json!({ "a": { "aa": { "aaa": 1 } } }));
/// assert_eq!(path(["a", "aa", "aaa"]).call(input.clone()).unwrap(), Some(Value::Int(1)));
/// assert_eq!(path(["bb", "x"]).call(input).unwrap(), None);
/// ```
pub fn path<I, K>(keys: I) -> Handler
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    Handler::new(Path {
        keys: keys.into_iter().map(Into::into).collect(),
    })
}
