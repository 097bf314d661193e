//! The borrowed accessor variants.
//!
//! Both store a borrow and never own the referent, so neither can be built
//! from an owned value, only from an existing reference. The borrow checker
//! makes the referent outlive the result; a dangling temporary is a compile
//! error rather than a documented hazard.

use std::fmt;

use crate::core::constructors::{Failure, Success};
use crate::core::envelope::Envelope;
use crate::core::repr::Repr;

/// A result whose success payload is a shared borrow of a value owned
/// elsewhere. Accepts both shared and mutable sources.
#[derive(Debug)]
pub struct Borrowed<'a, T: ?Sized, E = String> {
    repr: Repr<&'a T, E>,
}

impl<T: ?Sized, E> Borrowed<'_, T, E> {
    /// Whether this result holds a success referent.
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

impl<'a, T: ?Sized, E: fmt::Display> Borrowed<'a, T, E> {
    /// The referent borrow itself, good for the full `'a`. Repeatable.
    /// Raises the unhandled-error diagnostic if this result holds an error.
    #[must_use]
    pub fn get(&self) -> &'a T {
        *self.repr.as_ok()
    }

    /// Same as [`Borrowed::get`], consuming the result.
    #[must_use]
    pub fn take(self) -> &'a T {
        self.repr.into_ok()
    }
}

impl<'a, T: ?Sized, E> From<Success<&'a T>> for Borrowed<'a, T, E> {
    fn from(success: Success<&'a T>) -> Self {
        Self {
            repr: Repr::Ok(success.into_value()),
        }
    }
}

/// A mutable source demotes to a shared borrow.
impl<'a, T: ?Sized, E> From<Success<&'a mut T>> for Borrowed<'a, T, E> {
    fn from(success: Success<&'a mut T>) -> Self {
        Self {
            repr: Repr::Ok(success.into_value()),
        }
    }
}

impl<T: ?Sized, E, F: Into<E>> From<Failure<F>> for Borrowed<'_, T, E> {
    fn from(failure: Failure<F>) -> Self {
        let (error, trace) = failure.into_parts();
        Self {
            repr: Repr::Err(Envelope::new(error.into(), trace)),
        }
    }
}

/// A result whose success payload is an exclusive borrow of a value owned
/// elsewhere. Only a mutable source will do.
#[derive(Debug)]
pub struct BorrowedMut<'a, T: ?Sized, E = String> {
    repr: Repr<&'a mut T, E>,
}

impl<T: ?Sized, E> BorrowedMut<'_, T, E> {
    /// Whether this result holds a success referent.
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

impl<'a, T: ?Sized, E: fmt::Display> BorrowedMut<'a, T, E> {
    /// Reborrow the referent mutably. Repeatable. Raises the
    /// unhandled-error diagnostic if this result holds an error.
    #[must_use]
    pub fn get(&mut self) -> &mut T {
        &mut **self.repr.as_ok_mut()
    }

    /// Release the full `'a` borrow, consuming the result.
    #[must_use]
    pub fn take(self) -> &'a mut T {
        self.repr.into_ok()
    }
}

impl<'a, T: ?Sized, E> From<Success<&'a mut T>> for BorrowedMut<'a, T, E> {
    fn from(success: Success<&'a mut T>) -> Self {
        Self {
            repr: Repr::Ok(success.into_value()),
        }
    }
}

impl<T: ?Sized, E, F: Into<E>> From<Failure<F>> for BorrowedMut<'_, T, E> {
    fn from(failure: Failure<F>) -> Self {
        let (error, trace) = failure.into_parts();
        Self {
            repr: Repr::Err(Envelope::new(error.into(), trace)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Borrowed, BorrowedMut};
    use crate::core::constructors::{err, ok};

    #[test]
    fn shared_get_is_referent_identity() {
        let value = 42;
        let result: Borrowed<'_, i32> = ok(&value).into();
        assert!(result.is_ok());
        // No copy was made at construction.
        assert!(std::ptr::eq(result.get(), &value));
        assert_eq!(*result.get(), 42);
    }

    #[test]
    fn shared_accepts_a_mutable_source() {
        let mut value = 5;
        let result: Borrowed<'_, i32> = ok(&mut value).into();
        assert_eq!(*result.get(), 5);
    }

    #[test]
    fn shared_unsized_referent() {
        let result: Borrowed<'_, str> = ok("hello").into();
        assert_eq!(result.get(), "hello");
    }

    #[test]
    fn mutation_through_the_result_reaches_the_source() {
        let mut value = 42;
        {
            let mut result: BorrowedMut<'_, i32> = ok(&mut value).into();
            *result.get() += 1;
        }
        assert_eq!(value, 43);
    }

    #[test]
    fn take_releases_the_full_borrow() {
        let mut value = 1;
        let result: BorrowedMut<'_, i32> = ok(&mut value).into();
        let borrow = result.take();
        *borrow = 7;
        assert_eq!(value, 7);
    }

    #[test]
    fn err_round_trip() {
        let shared: Borrowed<'_, i32> = err("nope").into();
        assert!(shared.is_err());
        assert_eq!(shared.err(), "nope");

        let exclusive: BorrowedMut<'_, i32> = err("still no").into();
        assert!(exclusive.is_err());
        assert_eq!(exclusive.err(), "still no");
    }

    #[test]
    #[should_panic(expected = "unhandled error result: nope")]
    fn shared_get_on_error_raises_the_diagnostic() {
        let result: Borrowed<'_, i32> = err("nope").into();
        let _ = result.get();
    }

    #[test]
    #[should_panic(expected = "unhandled error result: nope")]
    fn exclusive_get_on_error_raises_the_diagnostic() {
        let mut result: BorrowedMut<'_, i32> = err("nope").into();
        let _ = result.get();
    }
}
