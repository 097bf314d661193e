//! The heap-owning accessor variant.

use std::fmt;

use crate::core::constructors::{Failure, Success};
use crate::core::envelope::Envelope;
use crate::core::fault::Fault;
use crate::core::repr::Repr;

/// A result holding sole ownership of a heap-allocated success object.
///
/// `T: ?Sized` admits trait objects, so a `Box<Concrete>` coerced to
/// `Box<dyn Trait>` constructs an `Owned<dyn Trait>`. Retrieval transfers the
/// box out at most once: the emptied slot is the already-retrieved state, and
/// a second retrieval is its own fault, distinct from the unhandled-error
/// diagnostic. An untaken success releases the heap object exactly once when
/// the result is dropped.
///
/// # Examples
///
/// ```
/// use backtrail::{Owned, ok};
///
/// let mut answer: Owned<i32> = ok(Box::new(42)).into();
/// let boxed = answer.get();
/// assert_eq!(*boxed, 42);
/// // A second `answer.get()` would fault: the value is already taken.
/// ```
#[derive(Debug)]
pub struct Owned<T: ?Sized, E = String> {
    repr: Repr<Option<Box<T>>, E>,
}

impl<T: ?Sized, E> Owned<T, E> {
    /// Whether this result holds a success value (taken or not).
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

    /// Re-raise the error to the caller with its original trace. Faults if
    /// this result is a success.
    #[must_use]
    pub fn forward(self) -> Failure<E> {
        self.repr.forward()
    }
}

impl<T: ?Sized, E: fmt::Display> Owned<T, E> {
    /// Transfer the heap object out, leaving the result in the
    /// already-retrieved state. A second call faults; an errored result
    /// raises the unhandled-error diagnostic.
    #[must_use]
    pub fn get(&mut self) -> Box<T> {
        self.repr
            .as_ok_mut()
            .take()
            .unwrap_or_else(|| Fault::AlreadyTaken.raise())
    }

    /// Same as [`Owned::get`], consuming the result.
    #[must_use]
    pub fn take(mut self) -> Box<T> {
        self.get()
    }
}

impl<T: ?Sized, E> From<Success<Box<T>>> for Owned<T, E> {
    fn from(success: Success<Box<T>>) -> Self {
        Self {
            repr: Repr::Ok(Some(success.into_value())),
        }
    }
}

impl<T: ?Sized, E, F: Into<E>> From<Failure<F>> for Owned<T, E> {
    fn from(failure: Failure<F>) -> Self {
        let (error, trace) = failure.into_parts();
        Self {
            repr: Repr::Err(Envelope::new(error.into(), trace)),
        }
    }
}
