use crate::{
    backend::Backend,
    db::term::TermDB,
    reports::Report,
    structures::{
        model::Model,
        term::{Sort, TermId},
    },
    types::err::{ErrorKind, TermError},
};

use super::{Context, ContextState};

impl Backend for Context {
    fn term_db(&self) -> &TermDB {
        &self.term_db
    }

    fn term_db_mut(&mut self) -> &mut TermDB {
        &mut self.term_db
    }

    fn assert_expr(&mut self, term: TermId) -> Result<(), ErrorKind> {
        match self.term_db.sort(term)? {
            Sort::Bool => {}
            Sort::Int => return Err(TermError::ExpectedBool.into()),
        }
        self.assertion_db.assert(term);
        self.state = ContextState::Input;
        Ok(())
    }

    fn push(&mut self) {
        self.assertion_db.push();
        self.state = ContextState::Input;
    }

    fn pop(&mut self) -> Result<(), ErrorKind> {
        self.assertion_db.pop()?;
        self.state = ContextState::Input;
        Ok(())
    }

    fn scope_depth(&self) -> usize {
        self.assertion_db.depth()
    }

    fn check_sat(&mut self, assumptions: &[TermId]) -> Result<Report, ErrorKind> {
        self.check(assumptions)
    }

    fn model(&self) -> Result<Model, ErrorKind> {
        match &self.state {
            ContextState::Satisfiable(model) => Ok(model.clone()),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    fn unsat_core(&self) -> Result<Vec<TermId>, ErrorKind> {
        match &self.state {
            ContextState::Unsatisfiable(core) => Ok(core.clone()),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    fn assertion_count(&self) -> Result<usize, ErrorKind> {
        Ok(self.assertion_db.count())
    }

    fn assertion(&self, index: usize) -> Result<TermId, ErrorKind> {
        Ok(self.assertion_db.get(index)?)
    }
}
