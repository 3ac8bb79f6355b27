//! Terms, and the handles by which terms are identified.
//!
//! Terms are stored in the [term database](crate::db::term) and are only ever accessed through a [TermId].
//! As the database is hash-consed, two terms are the same term if and only if they have the same id, and no structural comparison is made outside of the database.
//!
//! ```rust
//! # use conmux::db::term::TermDB;
//! let mut term_db = TermDB::default();
//!
//! let p = term_db.fresh_bool("p").unwrap();
//! let q = term_db.fresh_bool("q").unwrap();
//!
//! let p_and_q = term_db.mk_and(&[p, q]).unwrap();
//! assert_eq!(p_and_q, term_db.mk_and(&[p, q]).unwrap());
//! assert_ne!(p_and_q, term_db.mk_and(&[q, p]).unwrap());
//! ```

use crate::config::IntRepresentation;

/// Representation used for the index of a term.
pub type TermIndex = u32;

/// The identity of a term in a [term database](crate::db::term::TermDB).
///
/// Ids are ordered by creation, so a term always has a greater id than each of its subterms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermId(pub(crate) TermIndex);

impl TermId {
    /// The index of the term in the term database.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The sort of a term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sort {
    Bool,
    Int,
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool => write!(f, "Bool"),
            Self::Int => write!(f, "Int"),
        }
    }
}

/// A concrete value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Bool(bool),
    Int(IntRepresentation),
}

impl Value {
    /// The sort of the value.
    pub fn sort(&self) -> Sort {
        match self {
            Self::Bool(_) => Sort::Bool,
            Self::Int(_) => Sort::Int,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<IntRepresentation> {
        match self {
            Self::Bool(_) => None,
            Self::Int(i) => Some(*i),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) if *i < 0 => write!(f, "(- {})", i.unsigned_abs()),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

/// An uninterpreted constant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub name: String,
    pub sort: Sort,
}

/// The node of a term.
///
/// Subterms are given by id, and so a term is only meaningful relative to the database it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// An uninterpreted constant, e.g. `p` or `x`.
    Symbol(Symbol),

    /// A concrete value, e.g. `true` or `5`.
    Value(Value),

    Not(TermId),

    Eq(TermId, TermId),

    And(Vec<TermId>),

    Or(Vec<TermId>),

    Implies(TermId, TermId),

    /// Less than or equal, over integers.
    Le(TermId, TermId),
}
