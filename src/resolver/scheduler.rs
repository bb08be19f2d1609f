//! The dependency-driven fixpoint scheduler.
//!
//! Rules cannot be statically ordered: one rule may discover several facts in a single
//! pass, so the dependency edges are only fully known by executing. The scheduler runs
//! the simplest correct mechanism that tolerates that: repeated rounds over the rule
//! list, executing every ready rule, until a round adds no new fact.
//!
//! Execution is single-threaded by contract: rule bodies read the database and then
//! write facts, and first-writer-wins semantics plus the per-round progress check
//! would race under concurrent execution.

use std::collections::BTreeSet;

use crate::{
    diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics},
    mapping::MappingDatabase,
    metadata::ClassCache,
    resolver::{
        config::ResolverConfig,
        context::ResolutionContext,
        registry::RuleRegistry,
        report::{ResolutionReport, RuleOutcome, RuleState},
    },
    Error, Result,
};

/// Fixpoint driver over a rule registry.
///
/// # Rounds
///
/// Each round snapshots the set of *ready* rules (all declared dependencies
/// resolved, not yet terminal) against the facts of prior rounds, then executes
/// them in registration order. Rules in one round depend only on earlier
/// rounds' output, never on each other's.
/// A rule becomes terminal either by satisfying its whole `provides` set after
/// returning `true`, or by erroring. Rules that returned `false`, or `true`
/// with provides still missing, stay retryable and are revisited in later
/// rounds, which only happen while rounds keep producing new facts.
///
/// # Termination
///
/// The loop stops at the first round that adds no fact, and is capped at the
/// rule count (or [`ResolverConfig::max_rounds`]) regardless, so it halts even
/// if every dependency is unsatisfiable.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use jarscope::diagnostics::Diagnostics;
/// use jarscope::mapping::MappingDatabase;
/// use jarscope::metadata::{ClassCache, ClassModel, ClassProvider};
/// use jarscope::resolver::{DependencyScheduler, RuleDescriptor, RuleRegistry};
///
/// # struct EmptyArchive;
/// # impl ClassProvider for EmptyArchive {
/// #     fn load(&self, _name: &str) -> jarscope::Result<Option<ClassModel>> { Ok(None) }
/// # }
/// let registry = RuleRegistry::builder()
///     .register(
///         RuleDescriptor::builder("screen_class")
///             .provides_class("ns/Screen")
///             .build(|ctx| {
///                 ctx.mappings.insert_class("ns/Screen", "a")?;
///                 Ok(true)
///             }),
///     )
///     .build();
///
/// let classes = ClassCache::new(Arc::new(EmptyArchive));
/// let mappings = MappingDatabase::new();
/// let diagnostics = Diagnostics::new();
///
/// let scheduler = DependencyScheduler::new(registry);
/// let report = scheduler.run(&classes, &mappings, &diagnostics).unwrap();
///
/// assert_eq!(report.facts_resolved, 1);
/// assert!(report.unresolved_provides.is_empty());
/// ```
pub struct DependencyScheduler {
    /// The immutable rule catalog.
    registry: RuleRegistry,
    /// Run configuration.
    config: ResolverConfig,
}

impl DependencyScheduler {
    /// Creates a scheduler with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `registry` - The rule catalog to drive
    #[must_use]
    pub fn new(registry: RuleRegistry) -> Self {
        Self::with_config(registry, ResolverConfig::default())
    }

    /// Creates a scheduler with an explicit configuration.
    ///
    /// # Arguments
    ///
    /// * `registry` - The rule catalog to drive
    /// * `config` - Round ceiling, conflict handling, bookkeeping flags
    #[must_use]
    pub fn with_config(registry: RuleRegistry, config: ResolverConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the rule registry.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Runs the rule set to its fixpoint.
    ///
    /// Rules read and write through the given collaborators; unresolved facts
    /// and never-ready rules end up on the report, not in an error.
    ///
    /// # Arguments
    ///
    /// * `classes` - The class cache of this run
    /// * `mappings` - The fact store rules write to
    /// * `diagnostics` - Sink for per-rule outcomes and the final summary
    ///
    /// # Errors
    ///
    /// Returns an error only when [`ResolverConfig::conflict_is_fatal`] is set
    /// and a rule produced a conflicting resolution. Every other failure mode
    /// is local to one rule and recorded as a diagnostic.
    pub fn run(
        &self,
        classes: &ClassCache,
        mappings: &MappingDatabase,
        diagnostics: &Diagnostics,
    ) -> Result<ResolutionReport> {
        let ctx = ResolutionContext::new(classes, mappings, diagnostics);
        let rule_count = self.registry.len();
        let max_rounds = self.config.max_rounds.unwrap_or(rule_count);

        let mut states = vec![RuleState::Pending; rule_count];
        let mut attempts = vec![0_usize; rule_count];
        let mut snapshots = Vec::new();
        let mut rounds = 0_usize;
        let mut progressed = false;

        while rounds < max_rounds {
            rounds += 1;
            let facts_before = mappings.len();

            // Readiness is snapshot at round start: rules executing in the same
            // round see only prior rounds' facts as dependencies, so the ready
            // set is well-defined independent of in-round execution order.
            let ready: Vec<_> = self
                .registry
                .iter()
                .enumerate()
                .filter(|(index, rule)| {
                    !matches!(states[*index], RuleState::Satisfied | RuleState::Errored)
                        && rule.depends_satisfied(mappings)
                })
                .map(|(index, rule)| (index, rule.clone()))
                .collect();

            for (index, rule) in ready {
                attempts[index] += 1;
                match rule.run(&ctx) {
                    Ok(true) => {
                        states[index] = if rule.provides_complete(mappings) {
                            RuleState::Satisfied
                        } else {
                            RuleState::Retryable
                        };
                        diagnostics.push(
                            Diagnostic::new(
                                DiagnosticSeverity::Info,
                                DiagnosticCategory::Rule,
                                format!("succeeded in round {rounds}"),
                            )
                            .with_rule(rule.id()),
                        );
                    }
                    Ok(false) => {
                        states[index] = RuleState::Retryable;
                        diagnostics.push(
                            Diagnostic::new(
                                DiagnosticSeverity::Warning,
                                DiagnosticCategory::Rule,
                                format!("found no match in round {rounds}"),
                            )
                            .with_rule(rule.id()),
                        );
                    }
                    Err(error) => {
                        if self.config.conflict_is_fatal
                            && matches!(error, Error::Conflict { .. })
                        {
                            return Err(error);
                        }
                        states[index] = RuleState::Errored;
                        diagnostics.push(
                            Diagnostic::new(
                                DiagnosticSeverity::Error,
                                DiagnosticCategory::Rule,
                                error.to_string(),
                            )
                            .with_rule(rule.id()),
                        );
                    }
                }
            }

            if self.config.record_round_snapshots {
                snapshots.push(mappings.len());
            }

            progressed = mappings.len() > facts_before;
            if !progressed {
                break;
            }
        }

        // The cap only cut the run short if another round had work left to do.
        let capped = progressed
            && rounds == max_rounds
            && self.registry.iter().enumerate().any(|(index, rule)| {
                matches!(states[index], RuleState::Pending | RuleState::Retryable)
                    && rule.depends_satisfied(mappings)
            });
        if capped {
            diagnostics.warning(
                DiagnosticCategory::Scheduler,
                format!("round cap {max_rounds} reached before fixpoint"),
            );
        }

        let report = self.build_report(mappings, &states, &attempts, rounds, snapshots);
        self.report_summary(&report, diagnostics);
        Ok(report)
    }

    fn build_report(
        &self,
        mappings: &MappingDatabase,
        states: &[RuleState],
        attempts: &[usize],
        rounds: usize,
        round_snapshots: Vec<usize>,
    ) -> ResolutionReport {
        let outcomes: Vec<RuleOutcome> = self
            .registry
            .iter()
            .enumerate()
            .map(|(index, rule)| RuleOutcome {
                id: rule.id().to_string(),
                state: states[index],
                attempts: attempts[index],
            })
            .collect();

        let unresolved_rules: Vec<_> = self
            .registry
            .iter()
            .enumerate()
            .filter(|(index, _)| states[*index] == RuleState::Pending)
            .map(|(_, rule)| {
                let missing: Vec<_> = rule
                    .depends()
                    .filter(|symbol| !mappings.contains(symbol.as_str()))
                    .cloned()
                    .collect();
                (rule.id().to_string(), missing)
            })
            .collect();

        let unresolved_provides: Vec<_> = self
            .registry
            .iter()
            .flat_map(|rule| rule.provides())
            .filter(|symbol| !mappings.contains(symbol.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        ResolutionReport {
            rounds,
            facts_resolved: mappings.len(),
            outcomes,
            unresolved_rules,
            unresolved_provides,
            round_snapshots,
        }
    }

    fn report_summary(&self, report: &ResolutionReport, diagnostics: &Diagnostics) {
        if report.is_empty_resolution() && !self.registry.is_empty() {
            diagnostics.error(
                DiagnosticCategory::Scheduler,
                "resolution produced no facts",
            );
        }

        for (id, missing) in &report.unresolved_rules {
            let names: Vec<&str> = missing.iter().map(|s| s.as_str()).collect();
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticSeverity::Warning,
                    DiagnosticCategory::Scheduler,
                    format!("never ready, missing: {}", names.join(", ")),
                )
                .with_rule(id),
            );
        }

        for symbol in &report.unresolved_provides {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticSeverity::Warning,
                    DiagnosticCategory::Scheduler,
                    "declared fact never resolved",
                )
                .with_symbol(symbol.as_str()),
            );
        }

        diagnostics.info(DiagnosticCategory::Scheduler, report.summary());
    }
}
