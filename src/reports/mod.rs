/*!
Reports for a check.
*/

use crate::context::ContextState;

/// The result of a satisfiability check.
///
/// Every check made of a backend returns exactly one report.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula (with any assumptions) is satisfiable.
    Satisfiable,

    /// The formula (with any assumptions) is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula (with any assumptions) could not be determined, for some reason.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Unknown => Self::Unknown,
            ContextState::Satisfiable(_) => Self::Satisfiable,
            ContextState::Unsatisfiable(_) => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
