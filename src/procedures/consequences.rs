//! Determines which variables are fixed by some assumptions, and why.
//!
//! # Overview
//!
//! A variable is fixed by some assumptions if the variable takes the same value on every model of the assertions of a backend together with the assumptions.
//! For each fixed variable a [Consequence] is returned, pairing premises drawn from the assumptions with a literal which expresses the value of the variable.
//!
//! The procedure first checks the assumptions, and if satisfiable takes a model as a witness to a candidate value for each variable.
//! Then, for each variable with a value on the model, the procedure checks whether the negation of the value is consistent:
//!
//! - If consistent, the variable is not fixed and no consequence is recorded.
//! - If inconsistent, the variable is fixed and the unsatisfiable core of the check provides the premises of a consequence.
//! - If unknown, the procedure is abandoned and returns [Unknown](Report::Unknown) with no consequences.
//!
//! How the negation is checked depends on the variable:
//!
//! - An atomic boolean variable is fixed to a literal, and the negation of the literal is added to the assumptions for a single check.
//!   As the negation is an assumption, the negation may appear in the core, and is removed from the premises.
//! - Any other variable is fixed to an equality with its value, and the negation of the equality is asserted within a fresh scope for a single check under the original assumptions.
//!   As the negation is asserted, the core is drawn from the original assumptions only.
//!
//! In either case the temporary assumption or scope is held by a [guard](crate::transient::scope), and so is released on every path out of the check.
//!
//! ```rust
//! # use conmux::backend::Backend;
//! # use conmux::context::Context;
//! # use conmux::procedures::consequences::consequences;
//! # use conmux::reports::Report;
//! let mut the_context = Context::default();
//!
//! let p = the_context.term_db.fresh_bool("p").unwrap();
//! let q = the_context.term_db.fresh_bool("q").unwrap();
//! let p_implies_q = the_context.term_db.mk_implies(p, q).unwrap();
//! assert!(the_context.assert_expr(p_implies_q).is_ok());
//!
//! let (report, found) = consequences(&mut the_context, &[p], &[q]).unwrap();
//!
//! assert_eq!(report, Report::Satisfiable);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].premises(), &[p]);
//! assert_eq!(found[0].literal(), q);
//! ```

use crate::{
    backend::Backend,
    misc::log::targets::{self},
    reports::Report,
    structures::{consequence::Consequence, term::TermId},
    transient::scope::{ScopedAssumption, ScopedPush},
    types::err::ErrorKind,
};

/// The consequences of `assumptions` for the values of `variables`, given the assertions of `backend`.
///
/// Returns the report of the initial check, with no consequences, if the assumptions are not satisfiable.
/// Returns [Unknown](Report::Unknown), with no consequences, if any check is unknown.
/// Otherwise, returns [Satisfiable](Report::Satisfiable) together with a consequence for each fixed variable, in the order of `variables`.
pub fn consequences<B: Backend>(
    backend: &mut B,
    assumptions: &[TermId],
    variables: &[TermId],
) -> Result<(Report, Vec<Consequence>), ErrorKind> {
    backend.consequences_core(assumptions, variables)
}

/// The procedure behind [consequences], available to backends which override [consequences_core](Backend::consequences_core) in part.
pub fn search<B: Backend>(
    backend: &mut B,
    assumptions: &[TermId],
    variables: &[TermId],
) -> Result<(Report, Vec<Consequence>), ErrorKind> {
    match backend.check_sat(assumptions)? {
        Report::Satisfiable => {}
        report @ (Report::Unsatisfiable | Report::Unknown) => {
            log::info!(target: targets::CONSEQUENCES, "Assumptions are {report}");
            return Ok((report, Vec::default()));
        }
    }

    let model = backend.model()?;

    let mut extended_assumptions = assumptions.to_vec();
    let mut found = Vec::default();

    for variable in variables {
        let value = model.evaluate(*variable, backend.term_db_mut())?;

        if !backend.term_db().is_value(value) {
            log::trace!(target: targets::CONSEQUENCES, "{variable} is unfixed on the model");
            continue;
        }

        let term_db = backend.term_db();
        let consequence = if term_db.is_atomic_bool_var(*variable) {
            let (literal, negation) = match (term_db.is_true(value), term_db.is_false(value)) {
                (true, _) => (*variable, backend.term_db_mut().mk_not(*variable)?),
                (_, true) => (backend.term_db_mut().mk_not(*variable)?, *variable),
                _ => continue,
            };

            let scoped_assumptions = ScopedAssumption::push(&mut extended_assumptions, negation);

            match backend.check_sat(&scoped_assumptions)? {
                Report::Unknown => {
                    log::info!(target: targets::CONSEQUENCES, "Abandoned at {variable}");
                    return Ok((Report::Unknown, Vec::default()));
                }

                Report::Satisfiable => None,

                Report::Unsatisfiable => {
                    let mut premises = backend.unsat_core()?;
                    premises.retain(|premise| *premise != negation);
                    Some(Consequence::new(premises, literal))
                }
            }
        } else {
            let literal = backend.term_db_mut().mk_eq(*variable, value)?;
            let negation = backend.term_db_mut().mk_not(literal)?;

            let mut scope = ScopedPush::new(backend);
            scope.assert_expr(negation)?;

            match scope.check_sat(assumptions)? {
                Report::Unknown => {
                    log::info!(target: targets::CONSEQUENCES, "Abandoned at {variable}");
                    return Ok((Report::Unknown, Vec::default()));
                }

                Report::Satisfiable => None,

                Report::Unsatisfiable => {
                    let premises = scope.unsat_core()?;
                    Some(Consequence::new(premises, literal))
                }
            }
        };

        match consequence {
            Some(consequence) => {
                log::debug!(target: targets::CONSEQUENCES, "{variable} is fixed by {} premises", consequence.premises().len());
                found.push(consequence);
            }
            None => {
                log::trace!(target: targets::CONSEQUENCES, "{variable} is unfixed");
            }
        }
    }

    Ok((Report::Satisfiable, found))
}
