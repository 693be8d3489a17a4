//! Macros for building handlers with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`constraint!`]: Create a keep-or-reject handler (struct + `Handle` impl + factory fn)
//! - [`pipe!`]: Variadic [`pipe`](crate::pipe()), optionally with [`PipeOptions`](crate::PipeOptions)
//! - [`forward!`]: Variadic [`forward`](crate::forward())
//! - [`any_of!`]: Variadic [`any`](crate::any)
//! - [`all_of!`]: Variadic [`all`](crate::all)
//!
//! # Examples
//!
//! ```rust
//! use nebula_pipe::prelude::*;
//! use nebula_pipe::constraint;
//!
//! constraint! {
//!     /// Keeps even integers.
//!     pub Even for value;
//!     keep(input) { input.as_i64().is_some_and(|n| n % 2 == 0) }
//!     fn even();
//! }
//!
//! let handler = pipe![int(), even()];
//! assert_eq!(handler.call(Some(Value::Int(4))).unwrap(), Some(Value::Int(4)));
//! assert_eq!(handler.call(Some(Value::Int(5))).unwrap(), None);
//! ```

// ============================================================================
// CONSTRAINT MACRO
// ============================================================================

/// Creates a constraint handler: struct definition, `Handle` implementation,
/// constructor, and a factory function returning a [`Handler`](crate::Handler).
///
/// A constraint keeps present input for which `keep` holds and returns
/// absence for everything else, absent input included.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit constraint** (no fields):
/// ```rust,ignore
/// constraint! {
///     pub NonEmpty for value;
///     keep(input) { input.length().is_some_and(|n| n > 0) }
///     fn non_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// constraint! {
///     #[derive(PartialEq)]
///     pub MinLength { min: usize } for value;
///     keep(self, input) { input.length().is_some_and(|n| n >= self.min) }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// constraint! {
///     pub Min { min: Value } for value;
///     keep(self, input) { *input >= self.min }
///     new(min: impl Into<Value>) { Self { min: min.into() } }
///     fn min(min: impl Into<Value>);
/// }
/// ```
#[macro_export]
macro_rules! constraint {
    (@handle $name:ident, $self_:ident, $inp:ident, $rule:block) => {
        impl $crate::foundation::Handle for $name {
            fn handle(
                &$self_,
                input: ::std::option::Option<$crate::foundation::Value>,
            ) -> $crate::foundation::HandlerResult {
                Ok(input.filter(|$inp| $rule))
            }
        }
    };

    // ── Unit constraint + factory fn ─────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for value;
        keep($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Handle for $name {
            fn handle(
                &self,
                input: ::std::option::Option<$crate::foundation::Value>,
            ) -> $crate::foundation::HandlerResult {
                Ok(input.filter(|$inp| $rule))
            }
        }

        #[must_use]
        $vis fn $factory() -> $crate::foundation::Handler {
            $crate::foundation::Handler::new($name)
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for value;
        keep($self_:ident, $inp:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::constraint!(@handle $name, $self_, $inp, $rule);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $crate::foundation::Handler {
            $crate::foundation::Handler::new($name::new($($farg),*))
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for value;
        keep($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::constraint! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for value;
            keep($self_, $inp) $rule
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// Composes handlers with [`pipe`](crate::pipe()).
///
/// A leading `with <options>;` switches to [`pipe_with`](crate::pipe_with).
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let strict = pipe![int(), min(2)];
/// let lenient = pipe!(with PipeOptions::new().with_behavior(Behavior::Forward); int(), def(2));
/// assert_eq!(strict.call(Some("8".into())).unwrap(), None);
/// assert_eq!(lenient.call(Some("8".into())).unwrap(), Some(Value::Int(2)));
/// ```
#[macro_export]
macro_rules! pipe {
    (with $options:expr; $($handler:expr),* $(,)?) => {
        $crate::pipe_with(
            $options,
            ::std::vec::Vec::<$crate::foundation::Handler>::from([$($handler),*]),
        )
    };
    ($($handler:expr),* $(,)?) => {
        $crate::pipe(::std::vec::Vec::<$crate::foundation::Handler>::from([$($handler),*]))
    };
}

/// Composes handlers with [`forward`](crate::forward()).
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let handler = forward![int(), def(0)];
/// assert_eq!(handler.call(Some("x".into())).unwrap(), Some(Value::Int(0)));
/// ```
#[macro_export]
macro_rules! forward {
    ($($handler:expr),* $(,)?) => {
        $crate::forward(::std::vec::Vec::<$crate::foundation::Handler>::from([$($handler),*]))
    };
}

/// Composes handlers with [`any`](crate::any).
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let handler = any_of![int(), def(-1)];
/// assert_eq!(handler.call(Some(Value::Int(3))).unwrap(), Some(Value::Int(3)));
/// ```
#[macro_export]
macro_rules! any_of {
    ($($handler:expr),* $(,)?) => {
        $crate::any(::std::vec::Vec::<$crate::foundation::Handler>::from([$($handler),*]))
    };
}

/// Composes handlers with [`all`](crate::all).
///
/// ```rust
/// use nebula_pipe::prelude::*;
///
/// let handler = all_of![int(), min(1), max(5)];
/// assert_eq!(handler.call(Some(Value::Int(7))).unwrap(), None);
/// ```
#[macro_export]
macro_rules! all_of {
    ($($handler:expr),* $(,)?) => {
        $crate::all(::std::vec::Vec::<$crate::foundation::Handler>::from([$($handler),*]))
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Handle, Value};
    use crate::{Behavior, PipeOptions};

    constraint! {
        /// A test unit constraint.
        Positive for value;
        keep(input) { input.as_f64().is_some_and(|n| n > 0.0) }
        fn positive();
    }

    constraint! {
        #[derive(PartialEq)]
        AtLeast { floor: i64 } for value;
        keep(self, input) { input.as_i64().is_some_and(|n| n >= self.floor) }
        fn at_least(floor: i64);
    }

    constraint! {
        OneOf { allowed: Vec<Value> } for value;
        keep(self, input) { self.allowed.contains(input) }
        new(allowed: &[i64]) { Self { allowed: allowed.iter().copied().map(Value::Int).collect() } }
        fn one_of(allowed: &[i64]);
    }

    #[test]
    fn unit_constraint() {
        assert_eq!(Positive.handle(Some(Value::Int(1))).unwrap(), Some(Value::Int(1)));
        assert_eq!(positive().call(Some(Value::Int(0))).unwrap(), None);
        assert_eq!(positive().call(None).unwrap(), None);
    }

    #[test]
    fn struct_constraint_with_auto_new() {
        assert_eq!(AtLeast::new(3), AtLeast { floor: 3 });
        assert_eq!(at_least(3).call(Some(Value::Int(3))).unwrap(), Some(Value::Int(3)));
        assert_eq!(at_least(3).call(Some(Value::Int(2))).unwrap(), None);
    }

    #[test]
    fn struct_constraint_with_custom_new() {
        let handler = one_of(&[1, 2]);
        assert_eq!(handler.call(Some(Value::Int(2))).unwrap(), Some(Value::Int(2)));
        assert_eq!(handler.call(Some(Value::Int(3))).unwrap(), None);
    }

    #[test]
    fn empty_pipe_macro_is_identity() {
        assert_eq!(pipe![].call(Some(Value::Int(1))).unwrap(), Some(Value::Int(1)));
    }

    #[test]
    fn pipe_macro_with_options() {
        let handler = pipe!(
            with PipeOptions::new().with_behavior(Behavior::Forward);
            at_least(5),
            positive(),
        );
        assert_eq!(handler.call(Some(Value::Int(1))).unwrap(), None);
    }

    #[test]
    fn composition_macros() {
        let reject = crate::Handler::from_fn(|_| None);
        assert_eq!(
            any_of![reject.clone(), positive()].call(Some(Value::Int(2))).unwrap(),
            Some(Value::Int(2))
        );
        assert_eq!(all_of![positive(), reject.clone()].call(Some(Value::Int(2))).unwrap(), None);
        assert_eq!(
            forward![reject, crate::Handler::identity()].call(Some(Value::Int(2))).unwrap(),
            None
        );
    }
}
