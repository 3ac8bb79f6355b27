//! Literals.
//!
//! A literal is not a distinct type, and is instead any term which is either an atomic boolean variable or the negation of an atomic boolean variable.

use crate::{db::term::TermDB, structures::term::TermId};

/// Whether the term is an atomic boolean variable, or the negation of an atomic boolean variable.
pub fn is_literal(term_db: &TermDB, term: TermId) -> bool {
    if term_db.is_atomic_bool_var(term) {
        return true;
    }
    match term_db.is_not(term) {
        Some(negated) => term_db.is_atomic_bool_var(negated),
        None => false,
    }
}
