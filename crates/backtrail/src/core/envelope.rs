//! The stored pairing of an error value and its captured trace.

use std::fmt;

use crate::core::constructors::Failure;
use crate::core::fault::Fault;
use crate::trace::TraceCapture;

/// An error value and the stack trace captured when it was constructed.
///
/// Owned exclusively by the result that holds it; immutable after
/// construction. Forwarding re-packages it as a [`Failure`] without touching
/// the trace.
#[derive(Debug)]
pub struct Envelope<E> {
    error: E,
    trace: TraceCapture,
}

impl<E> Envelope<E> {
    pub(crate) fn new(error: E, trace: TraceCapture) -> Self {
        Self { error, trace }
    }

    /// The error value.
    #[must_use]
    pub fn error(&self) -> &E {
        &self.error
    }

    /// The trace captured at the original failure site.
    #[must_use]
    pub fn trace(&self) -> &TraceCapture {
        &self.trace
    }

    /// Re-package for propagation to the caller. Moves the original trace;
    /// nothing is re-captured.
    pub(crate) fn into_failure(self) -> Failure<E> {
        Failure::new(self.error, self.trace)
    }
}

impl<E: fmt::Display> Envelope<E> {
    /// The ensure-success gate: render the full diagnostic (error text plus
    /// the formatted trace of the failure site) and abort through the fault
    /// channel.
    #[cold]
    pub(crate) fn raise_unhandled(&self) -> ! {
        let diagnostic = format!("{}\n{}", self.error, self.trace.render());
        Fault::Unhandled(diagnostic).raise()
    }
}

impl<E> From<Failure<E>> for Envelope<E> {
    fn from(failure: Failure<E>) -> Self {
        let (error, trace) = failure.into_parts();
        Self { error, trace }
    }
}

#[cfg(test)]
mod tests {
    use super::Envelope;
    use crate::core::constructors::err;

    fn instruction_pointers(trace: &crate::trace::TraceCapture) -> Vec<usize> {
        trace.frames().iter().map(|frame| frame.ip() as usize).collect()
    }

    #[test]
    fn forwarding_keeps_the_original_trace() {
        let failure = err("boom");
        let original = instruction_pointers(failure.trace());

        let envelope = Envelope::from(failure);
        let forwarded = envelope.into_failure();
        assert_eq!(instruction_pointers(forwarded.trace()), original);
    }
}
