//! Determines the satisfiability of the assertions of a context, together with some assumptions.
//!
//! # Overview
//!
//! A check enumerates valuations of the symbols which occur in the assertions or assumptions, in order, until either:
//! - A valuation on which every assertion and assumption is true is found, and the check is satisfiable.
//! - Every valuation has been examined, and the check is unsatisfiable.
//! - The [enumeration limit](crate::config::Config::enumeration_limit) is reached, and the check is unknown.
//!
//! Valuations are ordered as an odometer over the symbols, ordered by first occurrence, with the first symbol turning fastest.
//! Boolean symbols take false before true, and integer symbols take each value of the configured band, from the least.
//!
//! Symbols which occur in neither the assertions nor the assumptions are not valued, and so are unfixed on any model from a check.
//!
//! Following an unsatisfiable check, a [core](crate::procedures::core) is obtained before the check returns.

use crate::{
    config::IntRepresentation,
    context::{Context, ContextState},
    misc::log::targets::{self},
    reports::Report,
    structures::{
        model::Model,
        term::{Sort, TermId, Value},
    },
    types::err::{ConfigError, ErrorKind, TermError},
};

/// The result of a search through valuations.
pub(crate) enum Search {
    /// A valuation on which each root is true.
    Model(Model),

    /// No valuation makes each root true.
    Exhausted,

    /// The enumeration limit was reached before either a model was found or the valuations were exhausted.
    Limit,
}

impl Context {
    /// Checks the assertions of the context together with the given assumptions, and updates the state of the context with the result.
    pub(crate) fn check(&mut self, assumptions: &[TermId]) -> Result<Report, ErrorKind> {
        self.state = ContextState::Input;

        for assumption in assumptions {
            match self.term_db.sort(*assumption)? {
                Sort::Bool => {}
                Sort::Int => return Err(TermError::ExpectedBool.into()),
            }
        }

        self.counters.checks += 1;
        let start = std::time::Instant::now();

        self.state = match self.search(assumptions)? {
            Search::Model(model) => ContextState::Satisfiable(model),
            Search::Exhausted => ContextState::Unsatisfiable(self.shrink_core(assumptions)?),
            Search::Limit => ContextState::Unknown,
        };

        self.counters.time += start.elapsed();

        let report = self.report();
        log::debug!(target: targets::CHECK, "Check {} with {} assumptions: {report}", self.counters.checks, assumptions.len());
        Ok(report)
    }

    /// Searches for a valuation on which each assertion and assumption is true.
    pub(crate) fn search(&mut self, assumptions: &[TermId]) -> Result<Search, ErrorKind> {
        let lower = self.config.int_lower.value;
        let upper = self.config.int_upper.value;
        if upper < lower {
            return Err(ConfigError::EmptyDomain.into());
        }

        let mut roots = self.assertion_db.assertions().to_vec();
        roots.extend_from_slice(assumptions);

        let symbols = self.term_db.symbols_of(&roots)?;

        let mut valuation = Vec::with_capacity(symbols.len());
        for symbol in &symbols {
            match self.term_db.sort(*symbol)? {
                Sort::Bool => valuation.push(Value::Bool(false)),
                Sort::Int => valuation.push(Value::Int(lower)),
            }
        }

        let mut model = Model::default();
        let mut examined: usize = 0;

        loop {
            if examined == self.config.enumeration_limit.value {
                log::info!(target: targets::CHECK, "Enumeration limit reached after {examined} valuations");
                return Ok(Search::Limit);
            }
            examined += 1;
            self.counters.valuations += 1;

            for (symbol, value) in symbols.iter().zip(&valuation) {
                model.insert(*symbol, *value);
            }

            if self.satisfies(&model, &roots)? {
                log::trace!(target: targets::CHECK, "Model found after {examined} valuations");
                return Ok(Search::Model(model));
            }

            if !next_valuation(&mut valuation, lower, upper) {
                log::trace!(target: targets::CHECK, "Exhausted {examined} valuations");
                return Ok(Search::Exhausted);
            }
        }
    }

    /// Whether each root is true on the model.
    fn satisfies(&self, model: &Model, roots: &[TermId]) -> Result<bool, ErrorKind> {
        for root in roots {
            match model.eval(*root, &self.term_db)? {
                Some(Value::Bool(true)) => {}
                Some(Value::Bool(false)) | None => return Ok(false),
                Some(Value::Int(_)) => return Err(TermError::ExpectedBool.into()),
            }
        }
        Ok(true)
    }
}

/// Advances the valuation to the next valuation, returning false if the valuation was the last valuation.
///
/// On returning false the valuation is reset to the first valuation.
fn next_valuation(
    valuation: &mut [Value],
    lower: IntRepresentation,
    upper: IntRepresentation,
) -> bool {
    for value in valuation.iter_mut() {
        match *value {
            Value::Bool(false) => {
                *value = Value::Bool(true);
                return true;
            }
            Value::Bool(true) => *value = Value::Bool(false),
            Value::Int(i) if i < upper => {
                *value = Value::Int(i + 1);
                return true;
            }
            Value::Int(_) => *value = Value::Int(lower),
        }
    }
    false
}
