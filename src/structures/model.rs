/*!
Models, as maps from symbols to values.

A model need not value every symbol of a term database.
For example, the [reference context](crate::context::Context) only values symbols which occur in the formula or assumptions of a check.

Evaluation is three-valued: a term whose value depends on some symbol without a value has no value.
Though, as with a partial valuation, a conjunction with a false conjunct is false (etc.) regardless of the other conjuncts.

```rust
# use conmux::db::term::TermDB;
# use conmux::structures::model::Model;
# use conmux::structures::term::Value;
let mut term_db = TermDB::default();
let p = term_db.fresh_bool("p").unwrap();
let q = term_db.fresh_bool("q").unwrap();
let p_and_q = term_db.mk_and(&[p, q]).unwrap();

let mut model = Model::default();
model.insert(p, Value::Bool(false));

// p is fixed, and so is p ∧ q.
assert_eq!(model.evaluate(p_and_q, &mut term_db), Ok(term_db.mk_false()));

// q is unfixed, so q evaluates to itself.
assert_eq!(model.evaluate(q, &mut term_db), Ok(q));
```
*/

use std::collections::HashMap;

use crate::{
    db::term::TermDB,
    structures::term::{Term, TermId, Value},
    types::err::TermError,
};

/// A (partial) map from symbols to values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    assignment: HashMap<TermId, Value>,
}

impl Model {
    /// Values the symbol, returning the previous value of the symbol, if any.
    pub fn insert(&mut self, symbol: TermId, value: Value) -> Option<Value> {
        self.assignment.insert(symbol, value)
    }

    /// The value of a symbol, if the symbol has a value.
    pub fn value_of(&self, symbol: TermId) -> Option<Value> {
        self.assignment.get(&symbol).copied()
    }

    /// A count of symbols with a value.
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Pairs of symbols and values, in no particular order.
    pub fn symbol_value_pairs(&self) -> impl Iterator<Item = (TermId, Value)> + '_ {
        self.assignment.iter().map(|(symbol, value)| (*symbol, *value))
    }

    /// The value of a term on the model, if the model fixes a value.
    pub fn eval(&self, term: TermId, term_db: &TermDB) -> Result<Option<Value>, TermError> {
        let value = match term_db.get(term)? {
            Term::Symbol(_) => self.value_of(term),

            Term::Value(value) => Some(*value),

            Term::Not(t) => match self.eval(*t, term_db)? {
                Some(Value::Bool(b)) => Some(Value::Bool(!b)),
                Some(Value::Int(_)) => return Err(TermError::ExpectedBool),
                None => None,
            },

            Term::Eq(a, b) => match (self.eval(*a, term_db)?, self.eval(*b, term_db)?) {
                (Some(a), Some(b)) => Some(Value::Bool(a == b)),
                _ => None,
            },

            Term::Le(a, b) => match (self.eval(*a, term_db)?, self.eval(*b, term_db)?) {
                (Some(Value::Int(a)), Some(Value::Int(b))) => Some(Value::Bool(a <= b)),
                (Some(Value::Bool(_)), _) | (_, Some(Value::Bool(_))) => {
                    return Err(TermError::ExpectedInt)
                }
                _ => None,
            },

            Term::And(ts) => self.eval_junction(ts, false, term_db)?,

            Term::Or(ts) => self.eval_junction(ts, true, term_db)?,

            Term::Implies(a, b) => {
                match (self.eval_bool(*a, term_db)?, self.eval_bool(*b, term_db)?) {
                    (Some(false), _) | (_, Some(true)) => Some(Value::Bool(true)),
                    (Some(true), Some(false)) => Some(Value::Bool(false)),
                    _ => None,
                }
            }
        };

        Ok(value)
    }

    fn eval_bool(&self, term: TermId, term_db: &TermDB) -> Result<Option<bool>, TermError> {
        match self.eval(term, term_db)? {
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(Value::Int(_)) => Err(TermError::ExpectedBool),
            None => Ok(None),
        }
    }

    /// Evaluates a conjunction (if `dominant` is false) or a disjunction (if `dominant` is true).
    ///
    /// The dominant value is the value which fixes the junction regardless of the value of other terms.
    fn eval_junction(
        &self,
        terms: &[TermId],
        dominant: bool,
        term_db: &TermDB,
    ) -> Result<Option<Value>, TermError> {
        let mut unfixed = false;
        for term in terms {
            match self.eval_bool(*term, term_db)? {
                Some(b) if b == dominant => return Ok(Some(Value::Bool(dominant))),
                Some(_) => {}
                None => unfixed = true,
            }
        }
        match unfixed {
            true => Ok(None),
            false => Ok(Some(Value::Bool(!dominant))),
        }
    }

    /// The term of the value of `term` on the model, if the model fixes a value, and otherwise `term`.
    pub fn evaluate(&self, term: TermId, term_db: &mut TermDB) -> Result<TermId, TermError> {
        match self.eval(term, term_db)? {
            Some(value) => term_db.mk_value(value),
            None => Ok(term),
        }
    }
}
