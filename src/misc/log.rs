/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide a record of the queries made to a backend, and why.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [consequence procedure](crate::procedures::consequences)
    pub const CONSEQUENCES: &str = "consequences";

    /// Logs related to the [mutex procedure](crate::procedures::mutexes)
    pub const MUTEXES: &str = "mutexes";

    /// Logs related to [checks](crate::procedures::check) made by the reference context
    pub const CHECK: &str = "check";

    /// Logs related to [unsatisfiable cores](crate::procedures::core)
    pub const CORE: &str = "core";

    /// Logs related to [scoped](crate::transient::scope) assumptions and assertions
    pub const SCOPE: &str = "scope";

    /// Logs related to the [term database](crate::db::term)
    pub const TERM_DB: &str = "term_db";
}
