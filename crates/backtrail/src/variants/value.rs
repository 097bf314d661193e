//! The by-value accessor variant.

use std::fmt;

use crate::core::constructors::{Failure, Success};
use crate::core::envelope::Envelope;
use crate::core::repr::Repr;

/// A result whose success payload is stored by value inside the container.
///
/// `get` hands out a mutable reference and can be called any number of times;
/// `take` extracts ownership. The error type defaults to `String`, the
/// conventional descriptive-message case.
///
/// # Examples
///
/// ```
/// use backtrail::{Value, err, ok};
///
/// let mut answer: Value<i32> = ok(42).into();
/// assert!(answer.is_ok());
/// assert_eq!(*answer.get(), 42);
///
/// let broken: Value<i32> = err("boom").into();
/// assert!(broken.is_err());
/// assert_eq!(broken.err(), "boom");
/// ```
#[derive(Debug)]
pub struct Value<T, E = String> {
    repr: Repr<T, E>,
}

impl<T, E> Value<T, E> {
    /// Whether this result holds a success value.
    #[inline]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.repr.is_ok()
    }

    /// Whether this result holds an error.
    #[inline]
    #[must_use]
    pub fn is_err(&self) -> bool {
        self.repr.is_err()
    }

    /// The error value. Faults if this result is a success.
    #[must_use]
    pub fn err(&self) -> &E {
        self.repr.err()
    }

    /// Re-raise the error to the caller, keeping the trace captured at the
    /// original failure site. Faults if this result is a success.
    #[must_use]
    pub fn forward(self) -> Failure<E> {
        self.repr.forward()
    }
}

impl<T, E: fmt::Display> Value<T, E> {
    /// Mutable access to the stored success value. Repeatable. Raises the
    /// unhandled-error diagnostic if this result holds an error.
    #[must_use]
    pub fn get(&mut self) -> &mut T {
        self.repr.as_ok_mut()
    }

    /// Extract the success value, consuming the result. Raises the
    /// unhandled-error diagnostic if this result holds an error.
    #[must_use]
    pub fn take(self) -> T {
        self.repr.into_ok()
    }
}

impl<T, E> From<Success<T>> for Value<T, E> {
    fn from(success: Success<T>) -> Self {
        Self {
            repr: Repr::Ok(success.into_value()),
        }
    }
}

/// Construction from a reference clones the referenced value in; the
/// container owns its own copy.
impl<T: Clone, E> From<Success<&T>> for Value<T, E> {
    fn from(success: Success<&'_ T>) -> Self {
        Self {
            repr: Repr::Ok(success.into_value().clone()),
        }
    }
}

impl<T, E, F: Into<E>> From<Failure<F>> for Value<T, E> {
    fn from(failure: Failure<F>) -> Self {
        let (error, trace) = failure.into_parts();
        Self {
            repr: Repr::Err(Envelope::new(error.into(), trace)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Value;
    use crate::core::constructors::{err, ok};

    #[test]
    fn ok_with_value() {
        let mut result: Value<i32> = ok(42).into();
        assert!(result.is_ok());
        assert!(!result.is_err());
        assert_eq!(*result.get(), 42);
    }

    #[test]
    fn get_is_repeatable_and_mutable() {
        let mut result: Value<i32> = ok(42).into();
        *result.get() += 1;
        assert_eq!(*result.get(), 43);
        assert_eq!(result.take(), 43);
    }

    #[test]
    fn ok_from_reference_clones_in() {
        let source = vec![1, 2, 3];
        let mut result: Value<Vec<i32>> = ok(&source).into();
        result.get().push(4);
        // The container owns a copy; the source is untouched.
        assert_eq!(source, vec![1, 2, 3]);
        assert_eq!(result.take(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn ok_storing_a_reference_by_value() {
        let value = 42;
        let mut result: Value<&i32> = ok(&value).into();
        assert!(std::ptr::eq(*result.get(), &value));
        assert_eq!(**result.get(), 42);
    }

    #[test]
    fn err_round_trip() {
        let result: Value<i32> = err("boom").into();
        assert!(result.is_err());
        assert!(!result.is_ok());
        assert_eq!(result.err(), "boom");
    }

    #[test]
    #[should_panic(expected = "unhandled error result: boom")]
    fn get_on_error_raises_the_diagnostic() {
        let mut result: Value<i32> = err("boom").into();
        let _ = result.get();
    }

    #[test]
    #[should_panic(expected = "error requested on a success result")]
    fn err_on_success_faults() {
        let result: Value<i32> = ok(42).into();
        let _ = result.err();
    }

    #[test]
    #[should_panic(expected = "cannot forward a success result")]
    fn forward_on_success_faults() {
        let result: Value<i32> = ok(42).into();
        let _ = result.forward();
    }
}
