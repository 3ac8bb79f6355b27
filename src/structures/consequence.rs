use crate::{db::term::TermDB, structures::term::TermId, types::err::TermError};

/// A literal (or equality with a value) which holds whenever each premise holds, given the assertions of some backend.
///
/// Premises are read as a conjunction, and so the order of premises carries no meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consequence {
    /// Terms whose conjunction implies the literal.
    premises: Vec<TermId>,

    /// The implied literal, either a (negated) atomic boolean variable or an equality between a term and a value.
    literal: TermId,
}

impl Consequence {
    pub fn new(premises: Vec<TermId>, literal: TermId) -> Self {
        Consequence { premises, literal }
    }

    /// Terms whose conjunction implies the literal.
    pub fn premises(&self) -> &[TermId] {
        &self.premises
    }

    /// The implied literal.
    pub fn literal(&self) -> TermId {
        self.literal
    }

    /// The consequence as a term, an implication from the conjunction of the premises to the literal.
    ///
    /// If there are no premises the antecedent is true.
    pub fn as_implication(&self, term_db: &mut TermDB) -> Result<TermId, TermError> {
        let antecedent = term_db.mk_and(&self.premises)?;
        term_db.mk_implies(antecedent, self.literal)
    }
}
