use crate::{
    config::Config,
    db::{assertion::AssertionDB, term::TermDB},
    reports::Report,
};

use super::{ContextState, Counters};

/// The reference context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to the checks of a context.
    pub counters: Counters,

    /// The term database.
    /// See [db::term](crate::db::term) for details.
    pub term_db: TermDB,

    /// The assertion database.
    /// See [db::assertion](crate::db::assertion) for details.
    pub assertion_db: AssertionDB,

    /// The status of the context.
    pub state: ContextState,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            term_db: TermDB::default(),
            assertion_db: AssertionDB::default(),
            state: ContextState::Input,
        }
    }

    /// A report on the most recent check of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
