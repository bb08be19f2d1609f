//! Configuration for the resolution scheduler.

/// Configuration for a resolution run.
///
/// Controls the round ceiling, conflict handling, and optional bookkeeping.
/// `Default` gives the behavior the engine contract mandates: the provable
/// round bound, lenient conflicts, no extra bookkeeping.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Maximum scheduling rounds; `None` uses the rule count, which is the
    /// provable upper bound (every round either adds a fact or is the last).
    pub max_rounds: Option<usize>,

    /// Abort the run with the conflict error when a rule writes a disagreeing
    /// value for an already-resolved symbol (default: `false`, meaning conflicts are
    /// recorded as diagnostics and the run continues with the first value).
    pub conflict_is_fatal: bool,

    /// Retain the database key count after each round on the report
    /// (default: `false`). Useful for monotonicity checks and debugging
    /// rule interactions.
    pub record_round_snapshots: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_rounds: None,
            conflict_is_fatal: false,
            record_round_snapshots: false,
        }
    }
}

impl ResolverConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit round ceiling.
    ///
    /// # Arguments
    ///
    /// * `max_rounds` - Maximum number of scheduling rounds to run
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Makes conflicting resolutions abort the run.
    #[must_use]
    pub fn with_fatal_conflicts(mut self) -> Self {
        self.conflict_is_fatal = true;
        self
    }

    /// Enables per-round key-count snapshots on the report.
    #[must_use]
    pub fn with_round_snapshots(mut self) -> Self {
        self.record_round_snapshots = true;
        self
    }
}
