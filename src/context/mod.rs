/*!
The reference context --- a backend to which terms are asserted and within which checks take place.

The context determines satisfiability by enumerating valuations of the symbols which occur in the assertions and assumptions of a check.
Boolean symbols range over true and false, and integer symbols over the band of integers given by the [configuration](crate::config::Config).
So, the context decides satisfiability *relative to that band*, and is only intended for small formulas.

If more valuations would need to be examined than the [enumeration limit](crate::config::Config::enumeration_limit) allows, the check is [unknown](crate::reports::Report::Unknown).

# Example
```rust
# use conmux::backend::Backend;
# use conmux::context::Context;
# use conmux::reports::Report;
# use conmux::structures::term::Value;
let mut the_context = Context::default();

let p = the_context.term_db.fresh_bool("p").unwrap();
let x = the_context.term_db.fresh_int("x").unwrap();
let five = the_context.term_db.mk_int(5).unwrap();
let x_five = the_context.term_db.mk_eq(x, five).unwrap();
let p_implies_x_five = the_context.term_db.mk_implies(p, x_five).unwrap();

assert!(the_context.assert_expr(p_implies_x_five).is_ok());

assert_eq!(the_context.check_sat(&[p]), Ok(Report::Satisfiable));
let model = the_context.model().unwrap();
assert_eq!(model.value_of(x), Some(Value::Int(5)));

let not_x_five = the_context.term_db.mk_not(x_five).unwrap();
assert_eq!(the_context.check_sat(&[not_x_five, p]), Ok(Report::Unsatisfiable));
assert_eq!(the_context.unsat_core(), Ok(vec![not_x_five, p]));
```
*/

mod backend;
mod counters;
pub use counters::Counters;
mod specific;
pub use specific::Context;

use crate::structures::{model::Model, term::TermId};

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Input has been given since the most recent check, if any.
    Input,

    /// The most recent check was satisfiable, on the given model.
    Satisfiable(Model),

    /// The most recent check was unsatisfiable, with the given core.
    Unsatisfiable(Vec<TermId>),

    /// The most recent check was abandoned.
    Unknown,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Satisfiable(_) => write!(f, "Satisfiable"),
            Self::Unsatisfiable(_) => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
