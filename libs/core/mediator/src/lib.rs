//! Request mediation for use-case handlers.
//!
//! Every use case is a [`Request`] type answered by a [`Handler`]. Callers go
//! through [`Mediator::send`], which runs the request's validation rules
//! before the handler and short-circuits with a validation [`Error`] when any
//! rule fails:
//!
//! ```text
//! caller ──► Mediator::send ──► validate ──(ok)──► Handler::handle ──► Outcome<T>
//!                                   │
//!                                   └─(failed)──► Error{kind: Validation, field → messages}
//! ```
//!
//! Handlers report expected failures through [`Outcome`] instead of panicking
//! or returning transport-specific errors; mapping kinds to HTTP lives in
//! `axum-helpers`.

mod error;
mod pipeline;

pub use error::{Error, ErrorKind, FieldErrors, Outcome};
pub use pipeline::{Handler, Mediator, Request};
