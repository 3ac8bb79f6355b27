/*!
A database of asserted terms, with a stack of scopes.

Each scope records the count of assertions when the scope was pushed, and popping the scope removes every assertion made since.
So, assertions made outside of any scope persist until the database is dropped.
*/

use crate::{
    misc::log::targets::{self},
    structures::term::TermId,
    types::err::BackendError,
};

/// The assertion database.
#[derive(Default)]
pub struct AssertionDB {
    /// Asserted terms, in the order of assertion.
    assertions: Vec<TermId>,

    /// Indicies at which a new scope begins.
    scope_indicies: Vec<usize>,
}

impl AssertionDB {
    pub fn assert(&mut self, term: TermId) {
        self.assertions.push(term);
    }

    /// A fresh scope.
    pub fn push(&mut self) {
        self.scope_indicies.push(self.assertions.len());
        log::trace!(target: targets::SCOPE, "Pushed scope {}", self.scope_indicies.len());
    }

    /// Removes the most recent scope, and all assertions made since the scope was pushed.
    pub fn pop(&mut self) -> Result<(), BackendError> {
        let Some(index) = self.scope_indicies.pop() else {
            log::error!(target: targets::SCOPE, "! Pop without a scope");
            return Err(BackendError::EmptyScope);
        };
        self.assertions.truncate(index);
        log::trace!(target: targets::SCOPE, "Popped scope {}", self.scope_indicies.len() + 1);
        Ok(())
    }

    /// The number of scopes pushed and not popped.
    pub fn depth(&self) -> usize {
        self.scope_indicies.len()
    }

    /// A count of assertions.
    pub fn count(&self) -> usize {
        self.assertions.len()
    }

    /// The assertion at `index`.
    pub fn get(&self, index: usize) -> Result<TermId, BackendError> {
        self.assertions
            .get(index)
            .copied()
            .ok_or(BackendError::AssertionIndex(index))
    }

    /// All assertions, in the order of assertion.
    pub fn assertions(&self) -> &[TermId] {
        &self.assertions
    }
}
