//! Transient structures, which live only for the duration of some procedure.

pub mod scope;
