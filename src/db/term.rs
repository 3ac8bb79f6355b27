/*!
A database of terms, accessed via methods on a [TermDB] struct.

The database is hash-consed: each distinct term is stored once, and constructing a term which has been constructed before returns the id of the stored term.
So, terms are compared by id alone.

Constructors check sorts, and return an error rather than constructing an ill-sorted term.
No simplification takes place, with the exception of conjunctions and disjunctions of fewer than two terms.
In particular, the negation of a negation is a fresh term.

Symbols are identified by name, and a name may only be used for symbols of a single sort.

The values true and false are created with the database, and so are always available.
*/

use std::collections::{HashMap, HashSet};

use crate::{
    config::IntRepresentation,
    misc::log::targets::{self},
    structures::term::{Sort, Symbol, Term, TermId, TermIndex, Value},
    types::err::TermError,
};

/// The term database.
pub struct TermDB {
    /// Terms, indexed by the index of their id.
    terms: Vec<Term>,

    /// The sort of each term, indexed as terms are.
    sorts: Vec<Sort>,

    /// A map from each term to its id.
    index: HashMap<Term, TermId>,

    /// The sort of each symbol name, as a name is used for at most one symbol.
    symbol_sorts: HashMap<String, Sort>,

    /// The id of the value true.
    the_true: TermId,

    /// The id of the value false.
    the_false: TermId,
}

impl Default for TermDB {
    fn default() -> Self {
        let the_true = Term::Value(Value::Bool(true));
        let the_false = Term::Value(Value::Bool(false));

        TermDB {
            terms: vec![the_true.clone(), the_false.clone()],
            sorts: vec![Sort::Bool, Sort::Bool],
            index: HashMap::from([(the_true, TermId(0)), (the_false, TermId(1))]),
            symbol_sorts: HashMap::default(),
            the_true: TermId(0),
            the_false: TermId(1),
        }
    }
}

impl TermDB {
    /// Stores the term, if not already stored, and returns its id.
    ///
    /// Fails if every id has been used.
    fn intern(&mut self, term: Term, sort: Sort) -> Result<TermId, TermError> {
        if let Some(id) = self.index.get(&term) {
            return Ok(*id);
        }

        let id = id_at(self.terms.len())?;
        log::trace!(target: targets::TERM_DB, "Interned {id} as {term:?}");

        self.terms.push(term.clone());
        self.sorts.push(sort);
        self.index.insert(term, id);
        Ok(id)
    }

    /// A count of terms in the database.
    pub fn count(&self) -> usize {
        self.terms.len()
    }

    /// The term identified by `id`.
    pub fn get(&self, id: TermId) -> Result<&Term, TermError> {
        self.terms.get(id.index()).ok_or(TermError::UnknownTerm)
    }

    /// The sort of the term identified by `id`.
    pub fn sort(&self, id: TermId) -> Result<Sort, TermError> {
        self.sorts
            .get(id.index())
            .copied()
            .ok_or(TermError::UnknownTerm)
    }

    fn require_sort(&self, id: TermId, sort: Sort) -> Result<(), TermError> {
        match (self.sort(id)?, sort) {
            (Sort::Bool, Sort::Bool) | (Sort::Int, Sort::Int) => Ok(()),
            (_, Sort::Bool) => Err(TermError::ExpectedBool),
            (_, Sort::Int) => Err(TermError::ExpectedInt),
        }
    }

    /// The uninterpreted constant with the given name and sort.
    ///
    /// A name names at most one symbol, and so reuse of a name with a different sort is an error.
    fn fresh_symbol(&mut self, name: String, sort: Sort) -> Result<TermId, TermError> {
        match self.symbol_sorts.get(&name) {
            Some(existing) if *existing != sort => {
                log::warn!(target: targets::TERM_DB, "! {name} is already a symbol of sort {existing}");
                return Err(TermError::SortMismatch);
            }
            Some(_) => {}
            None => {
                self.symbol_sorts.insert(name.clone(), sort);
            }
        }
        self.intern(Term::Symbol(Symbol { name, sort }), sort)
    }

    /// The uninterpreted boolean constant with the given name.
    pub fn fresh_bool(&mut self, name: impl Into<String>) -> Result<TermId, TermError> {
        self.fresh_symbol(name.into(), Sort::Bool)
    }

    /// The uninterpreted integer constant with the given name.
    pub fn fresh_int(&mut self, name: impl Into<String>) -> Result<TermId, TermError> {
        self.fresh_symbol(name.into(), Sort::Int)
    }

    pub fn mk_true(&self) -> TermId {
        self.the_true
    }

    pub fn mk_false(&self) -> TermId {
        self.the_false
    }

    pub fn mk_bool(&self, value: bool) -> TermId {
        match value {
            true => self.the_true,
            false => self.the_false,
        }
    }

    pub fn mk_int(&mut self, value: IntRepresentation) -> Result<TermId, TermError> {
        self.intern(Term::Value(Value::Int(value)), Sort::Int)
    }

    /// The term of a value.
    pub fn mk_value(&mut self, value: Value) -> Result<TermId, TermError> {
        match value {
            Value::Bool(b) => Ok(self.mk_bool(b)),
            Value::Int(i) => self.mk_int(i),
        }
    }

    pub fn mk_not(&mut self, term: TermId) -> Result<TermId, TermError> {
        self.require_sort(term, Sort::Bool)?;
        self.intern(Term::Not(term), Sort::Bool)
    }

    /// Equality between two terms of the same sort.
    pub fn mk_eq(&mut self, lhs: TermId, rhs: TermId) -> Result<TermId, TermError> {
        if self.sort(lhs)? != self.sort(rhs)? {
            return Err(TermError::SortMismatch);
        }
        self.intern(Term::Eq(lhs, rhs), Sort::Bool)
    }

    pub fn mk_implies(&mut self, antecedent: TermId, consequent: TermId) -> Result<TermId, TermError> {
        self.require_sort(antecedent, Sort::Bool)?;
        self.require_sort(consequent, Sort::Bool)?;
        self.intern(Term::Implies(antecedent, consequent), Sort::Bool)
    }

    /// The conjunction of the given terms.
    ///
    /// The conjunction of no terms is true, and the conjunction of a single term is that term.
    pub fn mk_and(&mut self, terms: &[TermId]) -> Result<TermId, TermError> {
        for term in terms {
            self.require_sort(*term, Sort::Bool)?;
        }
        match terms {
            [] => Ok(self.the_true),
            [term] => Ok(*term),
            _ => self.intern(Term::And(terms.to_vec()), Sort::Bool),
        }
    }

    /// The disjunction of the given terms.
    ///
    /// The disjunction of no terms is false, and the disjunction of a single term is that term.
    pub fn mk_or(&mut self, terms: &[TermId]) -> Result<TermId, TermError> {
        for term in terms {
            self.require_sort(*term, Sort::Bool)?;
        }
        match terms {
            [] => Ok(self.the_false),
            [term] => Ok(*term),
            _ => self.intern(Term::Or(terms.to_vec()), Sort::Bool),
        }
    }

    pub fn mk_le(&mut self, lhs: TermId, rhs: TermId) -> Result<TermId, TermError> {
        self.require_sort(lhs, Sort::Int)?;
        self.require_sort(rhs, Sort::Int)?;
        self.intern(Term::Le(lhs, rhs), Sort::Bool)
    }
}

/// Classifiers.
///
/// Each classifier returns false for an id outside the database.
impl TermDB {
    pub fn is_bool(&self, term: TermId) -> bool {
        matches!(self.sort(term), Ok(Sort::Bool))
    }

    /// Whether the term is an uninterpreted boolean constant.
    pub fn is_atomic_bool_var(&self, term: TermId) -> bool {
        matches!(
            self.get(term),
            Ok(Term::Symbol(Symbol {
                sort: Sort::Bool,
                ..
            }))
        )
    }

    pub fn is_true(&self, term: TermId) -> bool {
        term == self.the_true
    }

    pub fn is_false(&self, term: TermId) -> bool {
        term == self.the_false
    }

    pub fn is_value(&self, term: TermId) -> bool {
        matches!(self.get(term), Ok(Term::Value(_)))
    }

    /// The value of a value term.
    pub fn value(&self, term: TermId) -> Option<Value> {
        match self.get(term) {
            Ok(Term::Value(value)) => Some(*value),
            _ => None,
        }
    }

    /// The negated term, if the term is a negation.
    pub fn is_not(&self, term: TermId) -> Option<TermId> {
        match self.get(term) {
            Ok(Term::Not(negated)) => Some(*negated),
            _ => None,
        }
    }

    /// The symbol of a term, if the term is an uninterpreted constant.
    pub fn symbol(&self, term: TermId) -> Option<&Symbol> {
        match self.get(term) {
            Ok(Term::Symbol(symbol)) => Some(symbol),
            _ => None,
        }
    }
}

impl TermDB {
    /// The immediate subterms of a term.
    pub fn children(&self, term: TermId) -> Result<Vec<TermId>, TermError> {
        let children = match self.get(term)? {
            Term::Symbol(_) | Term::Value(_) => Vec::default(),
            Term::Not(t) => vec![*t],
            Term::Eq(a, b) | Term::Implies(a, b) | Term::Le(a, b) => vec![*a, *b],
            Term::And(ts) | Term::Or(ts) => ts.clone(),
        };
        Ok(children)
    }

    /// The uninterpreted constants which occur in some term of `roots`, ordered by first occurrence.
    pub fn symbols_of(&self, roots: &[TermId]) -> Result<Vec<TermId>, TermError> {
        let mut symbols = Vec::default();
        let mut seen: HashSet<TermId> = HashSet::default();
        let mut todo: Vec<TermId> = roots.iter().rev().copied().collect();

        while let Some(term) = todo.pop() {
            if !seen.insert(term) {
                continue;
            }
            match self.get(term)? {
                Term::Symbol(_) => symbols.push(term),
                _ => todo.extend(self.children(term)?.into_iter().rev()),
            }
        }

        Ok(symbols)
    }

    /// A string representation of the term, in prefix notation.
    pub fn term_string(&self, term: TermId) -> Result<String, TermError> {
        let string = match self.get(term)? {
            Term::Symbol(symbol) => symbol.name.clone(),
            Term::Value(value) => value.to_string(),
            Term::Not(t) => format!("(not {})", self.term_string(*t)?),
            Term::Eq(a, b) => format!("(= {} {})", self.term_string(*a)?, self.term_string(*b)?),
            Term::Implies(a, b) => {
                format!("(=> {} {})", self.term_string(*a)?, self.term_string(*b)?)
            }
            Term::Le(a, b) => format!("(<= {} {})", self.term_string(*a)?, self.term_string(*b)?),
            Term::And(ts) => self.application_string("and", ts)?,
            Term::Or(ts) => self.application_string("or", ts)?,
        };
        Ok(string)
    }

    fn application_string(&self, operator: &str, terms: &[TermId]) -> Result<String, TermError> {
        let mut string = format!("({operator}");
        for term in terms {
            string.push(' ');
            string.push_str(&self.term_string(*term)?);
        }
        string.push(')');
        Ok(string)
    }
}

/// The id of the term stored at `index`, if the index is within the representation of an id.
fn id_at(index: usize) -> Result<TermId, TermError> {
    match TermIndex::try_from(index) {
        Ok(index) => Ok(TermId(index)),
        Err(_) => {
            log::error!(target: targets::TERM_DB, "! Terms exhausted");
            Err(TermError::TermsExhausted)
        }
    }
}
