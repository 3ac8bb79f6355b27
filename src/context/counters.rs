use std::time::Duration;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of every check requested of the context.
    pub checks: usize,

    /// A count of every valuation examined, including those examined while shrinking a core.
    pub valuations: usize,

    /// The time taken during checks.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            checks: 0,
            valuations: 0,
            time: Duration::from_secs(0),
        }
    }
}
