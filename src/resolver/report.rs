//! Resolution run reporting.
//!
//! A run never hard-fails on missing evidence; instead everything that stayed
//! unresolved is collected here. The report answers the three questions a consumer
//! has at fixpoint: what was resolved, which rules never became ready, and which
//! declared facts were never produced.

use std::fmt;

use crate::mapping::SymbolicName;

/// Final state of one rule after a resolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleState {
    /// Never attempted; its declared dependencies were never all resolved.
    Pending,
    /// Ran, returned `true`, and every declared provided fact is resolved.
    Satisfied,
    /// Ran without completing its provides; would run again given new facts.
    ///
    /// Covers both "returned `false`" (in-body preconditions unmet) and
    /// "returned `true` with some declared provides still missing."
    Retryable,
    /// The rule body returned an error; excluded from further rounds.
    Errored,
}

impl fmt::Display for RuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleState::Pending => write!(f, "pending"),
            RuleState::Satisfied => write!(f, "satisfied"),
            RuleState::Retryable => write!(f, "retryable"),
            RuleState::Errored => write!(f, "errored"),
        }
    }
}

/// Per-rule outcome of a run.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    /// The rule identifier.
    pub id: String,
    /// Final state at fixpoint.
    pub state: RuleState,
    /// How many times the rule was executed across all rounds.
    pub attempts: usize,
}

/// Summary of a completed resolution run.
///
/// Produced by the scheduler at fixpoint. Unresolved entries are reported, not
/// raised: missing evidence is a normal outcome of heuristic matching.
#[derive(Debug, Clone, Default)]
pub struct ResolutionReport {
    /// Number of scheduling rounds executed.
    pub rounds: usize,
    /// Total facts in the database at fixpoint.
    pub facts_resolved: usize,
    /// Outcome of every registered rule, in registration order.
    pub outcomes: Vec<RuleOutcome>,
    /// Rules that never became ready, with the dependencies still missing.
    pub unresolved_rules: Vec<(String, Vec<SymbolicName>)>,
    /// Declared provided facts that were never produced, in key order.
    pub unresolved_provides: Vec<SymbolicName>,
    /// Database key count after each round; empty unless snapshots were enabled.
    pub round_snapshots: Vec<usize>,
}

impl ResolutionReport {
    /// Returns true if the whole run produced zero facts.
    ///
    /// A completely empty resolution usually means the wrong archive version
    /// or a broken rule catalog and deserves user-visible attention.
    #[must_use]
    pub fn is_empty_resolution(&self) -> bool {
        self.facts_resolved == 0
    }

    /// Returns the number of rules that reached [`RuleState::Satisfied`].
    #[must_use]
    pub fn satisfied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.state == RuleState::Satisfied)
            .count()
    }

    /// Generates a human-readable summary of the run.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} facts in {} rounds; {}/{} rules satisfied, {} never ready, {} provides unresolved",
            self.facts_resolved,
            self.rounds,
            self.satisfied_count(),
            self.outcomes.len(),
            self.unresolved_rules.len(),
            self.unresolved_provides.len(),
        )
    }
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = ResolutionReport::default();
        assert!(report.is_empty_resolution());
        assert_eq!(report.satisfied_count(), 0);
    }

    #[test]
    fn test_summary_counts() {
        let report = ResolutionReport {
            rounds: 2,
            facts_resolved: 3,
            outcomes: vec![
                RuleOutcome {
                    id: "a".into(),
                    state: RuleState::Satisfied,
                    attempts: 1,
                },
                RuleOutcome {
                    id: "b".into(),
                    state: RuleState::Retryable,
                    attempts: 2,
                },
            ],
            unresolved_rules: vec![("c".into(), vec![SymbolicName::from("ns/X")])],
            unresolved_provides: vec![SymbolicName::from("ns/X")],
            round_snapshots: Vec::new(),
        };

        assert!(!report.is_empty_resolution());
        assert_eq!(report.satisfied_count(), 1);
        let summary = report.summary();
        assert!(summary.contains("3 facts in 2 rounds"));
        assert!(summary.contains("1/2 rules satisfied"));
    }
}
