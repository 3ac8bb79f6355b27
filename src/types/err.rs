//! Error types used in the library.
//!
//! - Most of these indicate misuse of a backend, e.g. requesting a model after an unsatisfiable check.
//! - Some are expected --- e.g. `Unsupported` is returned by a backend which does not enumerate its assertions, and callers are expected to check for this before relying on the list.
//!
//! Note, an undecided check is *not* an error.
//! Undecided checks are reported through [Report::Unknown](crate::reports::Report::Unknown), and the consequence and mutex procedures return the report (with no results) rather than an error.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The primary error type, wrapping errors specific to some part of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Backend(BackendError),
    Config(ConfigError),
    Term(TermError),

    /// A request which requires some state of a backend was made while the backend was in some other state.
    /// E.g. a request for a model when the most recent check was not satisfiable.
    InvalidState,

    /// The backend does not support the request.
    /// In particular, the default enumeration of assertions.
    Unsupported,

    /// Writing to some output failed.
    Write,
}

/// Errors from a backend.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BackendError {
    /// An attempt to pop a scope when no scope had been pushed.
    EmptyScope,

    /// An assertion was requested at an index outside the assertions of the backend.
    AssertionIndex(usize),
}

impl From<BackendError> for ErrorKind {
    fn from(e: BackendError) -> Self {
        ErrorKind::Backend(e)
    }
}

/// Errors in configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds(&'static str),

    /// The domain of integer symbols is empty, as the lower bound exceeds the upper bound.
    EmptyDomain,
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors when building or inspecting terms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TermError {
    /// An id which does not identify a term in the term database.
    UnknownTerm,

    /// A term of boolean sort was required.
    ExpectedBool,

    /// A term of integer sort was required.
    ExpectedInt,

    /// The sorts of two terms which should agree do not.
    /// Or, a symbol name already in use for a symbol of some other sort.
    SortMismatch,

    /// There are no more fresh term ids.
    TermsExhausted,
}

impl From<TermError> for ErrorKind {
    fn from(e: TermError) -> Self {
        ErrorKind::Term(e)
    }
}

impl From<std::fmt::Error> for ErrorKind {
    fn from(_: std::fmt::Error) -> Self {
        ErrorKind::Write
    }
}
