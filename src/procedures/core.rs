/*!
A procedure to obtain an unsatisfiable core of the assumptions of an unsatisfiable check.

A core is a sub-sequence of the assumptions which, together with the assertions of the context, is unsatisfiable.
The assumptions themselves are always a core, and if [minimize_cores](crate::config::Config::minimize_cores) is set the assumptions are shrunk by deletion:

- Each assumption, in order, is removed from the candidate core.
- If the remaining assumptions are unsatisfiable the assumption is dropped, and otherwise the assumption is restored.

If a search is abandoned at the enumeration limit the assumption is restored, so the core is always a core, though it may not be minimal.
And, if the assertions alone are unsatisfiable, the core is empty.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    procedures::check::Search,
    structures::term::TermId,
    types::err::ErrorKind,
};

impl Context {
    /// An unsatisfiable core of `assumptions`, given the assumptions are unsatisfiable with the assertions of the context.
    pub(crate) fn shrink_core(&mut self, assumptions: &[TermId]) -> Result<Vec<TermId>, ErrorKind> {
        let mut core = assumptions.to_vec();

        if !self.config.minimize_cores.value {
            return Ok(core);
        }

        let mut index = 0;
        while index < core.len() {
            let mut trial = core.clone();
            let removed = trial.remove(index);

            match self.search(&trial)? {
                Search::Exhausted => {
                    log::trace!(target: targets::CORE, "Dropped {removed} from core");
                    core = trial;
                }
                Search::Model(_) | Search::Limit => index += 1,
            }
        }

        log::debug!(target: targets::CORE, "Core of {} from {} assumptions", core.len(), assumptions.len());
        Ok(core)
    }
}
