//! The discriminated storage shared by every accessor variant.

use std::fmt;

use crate::core::constructors::Failure;
use crate::core::envelope::Envelope;
use crate::core::fault::Fault;

/// Success payload or error envelope, exactly one of which is ever live.
/// The discriminant is fixed at construction and the compiler destroys only
/// the live arm. Variants wrap this by composition and differ only in what
/// `S` is and how they hand it out.
#[derive(Debug)]
pub(crate) enum Repr<S, E> {
    Ok(S),
    Err(Envelope<E>),
}

impl<S, E> Repr<S, E> {
    #[inline]
    pub(crate) fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[inline]
    pub(crate) fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// The error value, or the error-on-success fault.
    pub(crate) fn err(&self) -> &E {
        match self {
            Self::Err(envelope) => envelope.error(),
            Self::Ok(_) => Fault::ErrorOnSuccess.raise(),
        }
    }

    /// Consume into a [`Failure`] carrying the originally captured trace, or
    /// the forward-on-success fault.
    pub(crate) fn forward(self) -> Failure<E> {
        match self {
            Self::Err(envelope) => envelope.into_failure(),
            Self::Ok(_) => Fault::ForwardOnSuccess.raise(),
        }
    }
}

// Success-payload access runs the ensure-success policy: an errored result
// raises the unhandled-error diagnostic instead of handing anything out,
// which is why `E: Display` is required here and nowhere else.
impl<S, E: fmt::Display> Repr<S, E> {
    pub(crate) fn as_ok(&self) -> &S {
        match self {
            Self::Ok(value) => value,
            Self::Err(envelope) => envelope.raise_unhandled(),
        }
    }

    pub(crate) fn as_ok_mut(&mut self) -> &mut S {
        match self {
            Self::Ok(value) => value,
            Self::Err(envelope) => envelope.raise_unhandled(),
        }
    }

    pub(crate) fn into_ok(self) -> S {
        match self {
            Self::Ok(value) => value,
            Self::Err(envelope) => envelope.raise_unhandled(),
        }
    }
}
