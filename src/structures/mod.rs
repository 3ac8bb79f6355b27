//! Key structures, such as terms, models, and the results of the consequence and mutex procedures.
//!
//! # Other structures without an implementation.
//!
//! ## Literals
//!
//! A literal is an atomic boolean variable, or the negation of an atomic boolean variable.
//! Literals are terms, and whether a term is a literal is determined by [is_literal](literal::is_literal).
//!
//! ## Assumptions
//!
//! An assumption is a boolean term treated as true for a single check, without being asserted.
//! Assumptions are passed to a check as a slice of terms, and the order of the slice is preserved in any unsatisfiable core.

pub mod consequence;
pub mod literal;
pub mod model;
pub mod mutex;
pub mod term;
