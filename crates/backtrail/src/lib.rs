//! # Backtrail
//!
//! Result containers that carry the stack trace of their failure site.
//!
//! A [`Value`], [`Borrowed`]/[`BorrowedMut`], or [`Owned`] result holds
//! either a success payload or an error paired with a [`TraceCapture`] taken
//! the moment the error was constructed. Handled failures are ordinary data.
//! An *unhandled* one (a success access on an errored result) aborts with a
//! diagnostic naming the error and the symbolized frames of the original
//! failure site, not the access site.
//!
//! ## Quick Start
//!
//! ```rust
//! use backtrail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Value<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => ok(port).into(),
//!         Err(_) => err(format!("invalid port: {raw}")).into(),
//!     }
//! }
//!
//! fn connect(raw: &str) -> Value<String> {
//!     let port = take_or_forward!(parse_port(raw));
//!     ok(format!("connected on {port}")).into()
//! }
//!
//! let mut session = connect("8080");
//! assert_eq!(*session.get(), "connected on 8080");
//!
//! let broken = connect("not-a-port");
//! assert!(broken.is_err());
//! assert_eq!(broken.err(), "invalid port: not-a-port");
//! ```
//!
//! ## Design
//!
//! - **Success is free, failure pays for diagnostics**: only [`err`] walks
//!   the stack, and symbols are resolved only when a trace is rendered.
//! - **Forwarding never re-captures**: [`take_or_forward!`] propagates an
//!   error through any number of typed hops with the trace of the original
//!   failure site intact.
//! - **Misuse is a fault, not an error**: reading the error of a success,
//!   forwarding a success, or re-taking an [`Owned`] payload panics with a
//!   distinct [`Fault`] message — see [`core::fault`].
//! - **Move-only**: results never implement `Clone`, so a trace and a
//!   heap-owned payload each have exactly one owner.

pub mod core;
pub mod macros;
pub mod trace;
pub mod variants;

pub use crate::core::{Envelope, Failure, Fault, Success, err, ok};
pub use crate::trace::{ColorMode, TraceCapture, TracePrinter};
pub use crate::variants::{Borrowed, BorrowedMut, Owned, Value};

/// Convenient prelude with everything you need.
pub mod prelude {
    pub use crate::{Borrowed, BorrowedMut, Failure, Owned, Success, Value};
    pub use crate::{TraceCapture, TracePrinter};
    pub use crate::{ensure, fail, take_or_forward};
    pub use crate::{err, ok};
}
