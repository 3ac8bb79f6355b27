//! Databases for holding the terms and assertions of a context.
//!
//!   - [The term database](crate::db::term)
//!     + A hash-consed store of every term built, each identified by a [TermId](crate::structures::term::TermId).
//!   - [The assertion database](crate::db::assertion)
//!     + The terms asserted to a context, together with a stack of scopes.

pub mod assertion;
pub mod term;
