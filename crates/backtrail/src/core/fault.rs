//! Programming-error faults.
//!
//! These are the unrecoverable misuse categories, deliberately separate from
//! the modeled-error channel: a result holding an error is data, a fault is a
//! bug at the call site. Every variant panics with a distinct message so each
//! category is independently testable.

use thiserror::Error;

/// Caller-misuse categories raised by the result types.
#[derive(Debug, Error)]
pub enum Fault {
    /// A success payload was requested from a result holding an error. The
    /// message embeds the error's textual form and the stack trace captured
    /// at the original failure site, not at the access site.
    #[error("unhandled error result: {0}")]
    Unhandled(String),

    /// The error payload was requested from a success result.
    #[error("error requested on a success result")]
    ErrorOnSuccess,

    /// A success result was forwarded as if it held an error.
    #[error("cannot forward a success result")]
    ForwardOnSuccess,

    /// The owned success payload was retrieved more than once.
    #[error("owned success value already taken")]
    AlreadyTaken,
}

impl Fault {
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}
