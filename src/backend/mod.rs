/*!
The interface to an incremental satisfiability oracle.

The [consequence](crate::procedures::consequences) and [mutex](crate::procedures::mutexes) procedures are written against the [Backend] trait, and make no other use of a backend.
Any backend which implements the trait may be used, and the library provides one implementation in the [reference context](crate::context::Context).

# Contract

- A check returns exactly one [Report].
- A [model](Backend::model) is available only when the most recent check was satisfiable.
- An [unsatisfiable core](Backend::unsat_core) is available only when the most recent check was unsatisfiable, and is a sub-sequence of the assumptions of that check.
- Asserting a term, or pushing or popping a scope, invalidates any model or core.

Calls out of this sequence return [InvalidState](ErrorKind::InvalidState), and the procedures of the library never make such calls.

# Assertions

A backend may (optionally) support enumeration of its assertions by index.
The default implementations return [Unsupported](ErrorKind::Unsupported), which should be read as "the list is unavailable" rather than as "there are no assertions".
*/

mod display;

use crate::{
    db::term::TermDB,
    reports::Report,
    structures::{consequence::Consequence, model::Model, term::TermId},
    types::err::ErrorKind,
};

/// An incremental satisfiability oracle.
pub trait Backend {
    /// The term database from which all terms given to the backend are drawn.
    fn term_db(&self) -> &TermDB;

    fn term_db_mut(&mut self) -> &mut TermDB;

    /// Permanently asserts a (boolean) term, or until the current scope is popped.
    fn assert_expr(&mut self, term: TermId) -> Result<(), ErrorKind>;

    /// A fresh scope for assertions.
    fn push(&mut self);

    /// Removes the most recent scope, together with all assertions made within the scope.
    fn pop(&mut self) -> Result<(), ErrorKind>;

    /// The number of scopes pushed and not popped.
    fn scope_depth(&self) -> usize;

    /// Checks the satisfiability of the assertions together with the given assumptions.
    fn check_sat(&mut self, assumptions: &[TermId]) -> Result<Report, ErrorKind>;

    /// A model of the most recent check.
    fn model(&self) -> Result<Model, ErrorKind>;

    /// An unsatisfiable core of the most recent check.
    fn unsat_core(&self) -> Result<Vec<TermId>, ErrorKind>;

    /// A count of assertions, if supported.
    fn assertion_count(&self) -> Result<usize, ErrorKind> {
        Err(ErrorKind::Unsupported)
    }

    /// The assertion at `index`, if supported.
    #[allow(unused_variables)]
    fn assertion(&self, index: usize) -> Result<TermId, ErrorKind> {
        Err(ErrorKind::Unsupported)
    }

    /// All assertions, in the order of assertion, if supported.
    fn assertions(&self) -> Result<Vec<TermId>, ErrorKind> {
        let count = self.assertion_count()?;
        let mut assertions = Vec::with_capacity(count);
        for index in 0..count {
            assertions.push(self.assertion(index)?);
        }
        Ok(assertions)
    }

    /// Writes declarations of each symbol in the assertions, followed by the assertions.
    fn display(&self, out: &mut dyn std::fmt::Write) -> Result<(), ErrorKind> {
        let assertions = self.assertions()?;
        display::write_assertions(self.term_db(), &assertions, out)
    }

    /// The consequences of the assumptions for the values of the variables.
    ///
    /// Called by [consequences](crate::procedures::consequences::consequences), and may be overridden by a backend with some native procedure.
    fn consequences_core(
        &mut self,
        assumptions: &[TermId],
        variables: &[TermId],
    ) -> Result<(Report, Vec<Consequence>), ErrorKind>
    where
        Self: Sized,
    {
        crate::procedures::consequences::search(self, assumptions, variables)
    }
}
