//! Procedures which drive a backend.
//!
//! The [consequence](consequences) and [mutex](mutexes) procedures are generic over any [Backend](crate::backend::Backend).
//! The [check](check) and [core](core) procedures are methods of the [reference context](crate::context::Context), and are primarily placed here for documentation.

pub mod check;
pub mod consequences;
pub mod core;
pub mod mutexes;
