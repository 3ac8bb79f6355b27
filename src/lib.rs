//! A library for computing consequences and mutexes by driving an incremental satisfiability oracle.
//!
//! conmux does not (seriously) determine satisfiability itself.
//! Instead, conmux treats some [backend](crate::backend) as an oracle which answers satisfiable, unsatisfiable, or unknown, and builds two deductions on top of the oracle:
//!
//! - [Consequences](crate::procedures::consequences): for each of some variables, whether the variable is fixed by some assumptions, and if so by which of the assumptions.
//! - [Mutexes](crate::procedures::mutexes): groups of literals, no two of which may be true together.
//!
//! Both are searches over checks, and are written to make few checks while returning sound results.
//!
//! # Orientation
//!
//! The library is designed around the [Backend](crate::backend::Backend) trait, which captures the (narrow) use made of an oracle:
//! assertions, scopes, checks under assumptions, models, and unsatisfiable cores.
//!
//! Terms are built in a [term database](crate::db::term), which is hash-consed, and so terms are compared by [id](crate::structures::term::TermId) alone.
//!
//! A [reference context](crate::context::Context) implements the backend trait by enumeration of valuations, and is useful for small formulas and for testing.
//!
//! Useful starting points, then, may be:
//! - The [consequence procedure](crate::procedures::consequences).
//! - The [mutex procedure](crate::procedures::mutexes).
//! - The [guards](crate::transient::scope) through which temporary assumptions and assertions are made.
//!
//! # Examples
//!
//! + Find the consequences of an assumption.
//!
//! ```rust
//! # use conmux::backend::Backend;
//! # use conmux::context::Context;
//! # use conmux::procedures::consequences::consequences;
//! # use conmux::reports::Report;
//! let mut the_context = Context::default();
//!
//! let x = the_context.term_db.fresh_int("x").unwrap();
//! let five = the_context.term_db.mk_int(5).unwrap();
//! let x_five = the_context.term_db.mk_eq(x, five).unwrap();
//! assert!(the_context.assert_expr(x_five).is_ok());
//!
//! let (report, found) = consequences(&mut the_context, &[], &[x]).unwrap();
//! assert_eq!(report, Report::Satisfiable);
//! assert_eq!(found.len(), 1);
//!
//! let implication = found[0].as_implication(&mut the_context.term_db).unwrap();
//! assert_eq!(
//!     the_context.term_db.term_string(implication).unwrap(),
//!     "(=> true (= x 5))"
//! );
//! ```
//!
//! + Find groups of mutually exclusive literals.
//!
//! ```rust
//! # use conmux::backend::Backend;
//! # use conmux::context::Context;
//! # use conmux::procedures::mutexes::find_mutexes;
//! # use conmux::reports::Report;
//! let mut the_context = Context::default();
//!
//! let [a, b, c] = ["a", "b", "c"].map(|name| the_context.term_db.fresh_bool(name).unwrap());
//! for (p, q) in [(a, b), (a, c), (b, c)] {
//!     let not_p = the_context.term_db.mk_not(p).unwrap();
//!     let not_q = the_context.term_db.mk_not(q).unwrap();
//!     let not_both = the_context.term_db.mk_or(&[not_p, not_q]).unwrap();
//!     assert!(the_context.assert_expr(not_both).is_ok());
//! }
//!
//! let (report, groups) = find_mutexes(&mut the_context, &[a, b, c]).unwrap();
//! assert_eq!(report, Report::Satisfiable);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].literals(), &[a, b, c]);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made for each check and each result of the procedures, and targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the consequence procedure can be filtered with `RUST_LOG=consequences …` or,
//! - Logs of each check of the reference context can be found with `RUST_LOG=check=debug …`

#![allow(clippy::single_match)]

pub mod backend;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod transient;
pub mod types;
