//! Finds groups of literals, no two of which may be true together.
//!
//! # Overview
//!
//! Two literals are mutually exclusive if assuming both literals is unsatisfiable with the assertions of a backend.
//! The procedure greedily extracts cliques from the (implicit) graph of mutual exclusion, using checks of pairs as the only test for an edge.
//!
//! Roughly, where 𝐀 is the collection of candidates:
//!
//! ```none
//! while 𝐀 is not empty
//!   𝐏 = 𝐀, 𝐑 = []
//!   while 𝐏 is not empty
//!     take p from 𝐏
//!     if p is not a literal, stop
//!     add p to 𝐑
//!     𝐏 = { q ∈ 𝐏 | q is a literal and p, q is unsatisfiable }
//!   if 𝐑 has at least two literals, yield 𝐑
//!   𝐀 = 𝐀 \ 𝐑
//! ```
//!
//! Each literal in a group is mutually exclusive with each literal which preceded it, and so the literals of a group are pairwise exclusive.
//! And, as the literals of a group are removed from the candidates before the next group is built, each candidate belongs to at most one group.
//!
//! # Notes
//!
//! - Candidates are distinguished by identity, and are taken from the pool in the order of their [ids](crate::structures::term::TermId).
//! - A candidate which is not a literal is never checked with a literal, and so is never carried over to the pool of a group.
//! - Still, a candidate which is not a literal may be the first taken from the candidates for a group.
//!   If so, the group is closed with no literals and the candidate is discarded, as it may not belong to any group.
//! - If any check is unknown the procedure is abandoned and returns [Unknown](Report::Unknown) with no groups.
//!
//! ```rust
//! # use conmux::backend::Backend;
//! # use conmux::context::Context;
//! # use conmux::procedures::mutexes::find_mutexes;
//! # use conmux::reports::Report;
//! let mut the_context = Context::default();
//!
//! let p = the_context.term_db.fresh_bool("p").unwrap();
//! let q = the_context.term_db.fresh_bool("q").unwrap();
//! let r = the_context.term_db.fresh_bool("r").unwrap();
//!
//! let not_p = the_context.term_db.mk_not(p).unwrap();
//! let not_q = the_context.term_db.mk_not(q).unwrap();
//! let at_most_one = the_context.term_db.mk_or(&[not_p, not_q]).unwrap();
//! assert!(the_context.assert_expr(at_most_one).is_ok());
//!
//! let (report, groups) = find_mutexes(&mut the_context, &[p, q, r]).unwrap();
//!
//! assert_eq!(report, Report::Satisfiable);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].literals(), &[p, q]);
//! ```

use std::collections::BTreeSet;

use crate::{
    backend::Backend,
    misc::log::targets::{self},
    reports::Report,
    structures::{literal::is_literal, mutex::MutexGroup, term::TermId},
    transient::scope::ScopedAssumption,
    types::err::ErrorKind,
};

/// Groups of mutually exclusive literals from `candidates`, given the assertions of `backend`.
///
/// Returns [Unknown](Report::Unknown), with no groups, if any check is unknown.
/// Otherwise, returns [Satisfiable](Report::Satisfiable) together with the groups found.
pub fn find_mutexes<B: Backend>(
    backend: &mut B,
    candidates: &[TermId],
) -> Result<(Report, Vec<MutexGroup>), ErrorKind> {
    let mut remaining: BTreeSet<TermId> = candidates.iter().copied().collect();
    let mut mutexes = Vec::default();

    while !remaining.is_empty() {
        let mut pool = remaining.clone();
        let mut group = Vec::default();

        while let Some(p) = pool.pop_first() {
            if !is_literal(backend.term_db(), p) {
                log::trace!(target: targets::MUTEXES, "{p} is not a literal, closing group of {}", group.len());
                remaining.remove(&p);
                break;
            }

            group.push(p);

            let mut assumptions = vec![p];
            let mut exclusive = BTreeSet::default();

            for q in std::mem::take(&mut pool) {
                if !is_literal(backend.term_db(), q) {
                    continue;
                }

                let scoped_assumptions = ScopedAssumption::push(&mut assumptions, q);

                match backend.check_sat(&scoped_assumptions)? {
                    Report::Unsatisfiable => {
                        exclusive.insert(q);
                    }

                    Report::Satisfiable => {}

                    Report::Unknown => {
                        log::info!(target: targets::MUTEXES, "Abandoned at {p} and {q}");
                        return Ok((Report::Unknown, Vec::default()));
                    }
                }
            }

            pool = exclusive;
        }

        for literal in &group {
            remaining.remove(literal);
        }

        if group.len() > 1 {
            log::debug!(target: targets::MUTEXES, "Group of {} literals", group.len());
            mutexes.push(MutexGroup::new(group));
        }
    }

    Ok((Report::Satisfiable, mutexes))
}
