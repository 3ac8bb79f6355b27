use crate::{
    db::term::TermDB,
    structures::term::{Symbol, TermId},
    types::err::{ErrorKind, TermError},
};

/// Writes a declaration for each symbol in `assertions`, followed by each assertion.
///
/// ```none
/// (declare-const p Bool)
/// (declare-const x Int)
/// (assert (=> p (= x 5)))
/// ```
pub(super) fn write_assertions(
    term_db: &TermDB,
    assertions: &[TermId],
    out: &mut dyn std::fmt::Write,
) -> Result<(), ErrorKind> {
    for symbol in term_db.symbols_of(assertions)? {
        let Some(Symbol { name, sort }) = term_db.symbol(symbol) else {
            return Err(TermError::UnknownTerm.into());
        };
        writeln!(out, "(declare-const {name} {sort})")?;
    }

    for assertion in assertions {
        writeln!(out, "(assert {})", term_db.term_string(*assertion)?)?;
    }

    Ok(())
}
