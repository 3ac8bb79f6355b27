use crate::structures::term::TermId;

/// A group of literals, no two of which may be true together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutexGroup {
    literals: Vec<TermId>,
}

impl MutexGroup {
    pub(crate) fn new(literals: Vec<TermId>) -> Self {
        MutexGroup { literals }
    }

    /// The literals of the group, in the order they were added to the group.
    pub fn literals(&self) -> &[TermId] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: TermId) -> bool {
        self.literals.contains(&literal)
    }

    /// Each (unordered) pair of distinct literals in the group.
    pub fn pairs(&self) -> impl Iterator<Item = (TermId, TermId)> + '_ {
        self.literals.iter().enumerate().flat_map(move |(index, p)| {
            self.literals[index + 1..].iter().map(move |q| (*p, *q))
        })
    }
}
