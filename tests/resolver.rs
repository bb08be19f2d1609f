//! Resolution engine integration tests.
//!
//! End-to-end scheduler scenarios through the public API: the two-rule dependency
//! chain, monotonicity and determinism of the database, the termination bound,
//! the exactly-one-candidate law at rule level, and conflict surfacing.

use std::collections::HashMap;
use std::sync::Arc;

use jarscope::{
    diagnostics::Diagnostics,
    mapping::MappingDatabase,
    matcher::{exactly_one, matching_methods, MemberQuery},
    metadata::{
        AccessFlags, ClassCache, ClassModel, ClassProvider, ConstantPool, MethodModel, PoolEntry,
    },
    resolver::{
        DependencyScheduler, ResolverConfig, RuleDescriptor, RuleRegistry, RuleState,
    },
    Result,
};

/// In-memory archive over fixture classes.
struct Archive {
    classes: HashMap<String, ClassModel>,
}

impl Archive {
    fn new(classes: Vec<ClassModel>) -> Arc<Self> {
        Arc::new(Self {
            classes: classes
                .into_iter()
                .map(|class| (class.name.clone(), class))
                .collect(),
        })
    }
}

impl ClassProvider for Archive {
    fn load(&self, binary_name: &str) -> Result<Option<ClassModel>> {
        Ok(self.classes.get(binary_name).cloned())
    }
}

/// A minimal class with the given void methods and pool strings.
fn class(name: &str, void_methods: &[&str], pool_strings: &[&str]) -> ClassModel {
    ClassModel {
        name: name.to_string(),
        super_name: Some("java/lang/Object".to_string()),
        interfaces: vec![],
        access: AccessFlags::PUBLIC,
        fields: vec![],
        methods: void_methods
            .iter()
            .map(|method_name| MethodModel {
                name: (*method_name).to_string(),
                descriptor: "()V".to_string(),
                access: AccessFlags::PUBLIC,
                instructions: vec![],
            })
            .collect(),
        pool: ConstantPool::new(
            pool_strings
                .iter()
                .map(|s| PoolEntry::Utf8((*s).to_string()))
                .collect(),
        ),
    }
}

fn run(
    registry: RuleRegistry,
    archive: Arc<Archive>,
) -> (jarscope::resolver::ResolutionReport, MappingDatabase, Diagnostics) {
    let classes = ClassCache::new(archive);
    let mappings = MappingDatabase::new();
    let diagnostics = Diagnostics::new();
    let report = DependencyScheduler::new(registry)
        .run(&classes, &mappings, &diagnostics)
        .expect("lenient run never errors");
    (report, mappings, diagnostics)
}

/// The canonical two-rule scenario: rule A resolves class "X" unconditionally,
/// rule B needs "X" and then resolves method "X m ()V".
fn two_rule_registry() -> RuleRegistry {
    RuleRegistry::builder()
        .register(
            RuleDescriptor::builder("rule_a")
                .provides_class("X")
                .build(|ctx| {
                    ctx.mappings.insert_class("X", "a/bq")?;
                    Ok(true)
                }),
        )
        .register(
            RuleDescriptor::builder("rule_b")
                .provides_method("X m ()V")
                .depends_class("X")
                .build(|ctx| {
                    let target = match ctx.resolve_class("X") {
                        Some(target) => target,
                        None => return Ok(false),
                    };
                    let candidates =
                        matching_methods(&target, &MemberQuery::new().descriptor("()V"));
                    match exactly_one(&candidates) {
                        Some(found) => {
                            ctx.mappings
                                .insert_member("X m ()V", target.name(), &found.name, "()V")?;
                            Ok(true)
                        }
                        None => Ok(false),
                    }
                }),
        )
        .build()
}

#[test]
fn test_end_to_end_two_rules() {
    let archive = Archive::new(vec![class("a/bq", &["c"], &[])]);
    let (report, mappings, _) = run(two_rule_registry(), archive);

    // Round 1 resolves the class, round 2 the method.
    assert_eq!(report.rounds, 2);
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings.get_class("X").as_deref(), Some("a/bq"));
    assert_eq!(
        mappings.get_member("X m ()V").map(|m| m.name),
        Some("c".to_string())
    );
    assert!(report.unresolved_provides.is_empty());
    assert!(report.unresolved_rules.is_empty());
    assert_eq!(report.satisfied_count(), 2);
}

#[test]
fn test_exactly_one_law_never_writes_ambiguous_facts() {
    // Zero and two ()V candidates must leave the method fact unresolved;
    // the class fact still resolves.
    for fixture in [
        class("a/bq", &[], &[]),
        class("a/bq", &["c", "d"], &[]),
    ] {
        let archive = Archive::new(vec![fixture]);
        let (report, mappings, _) = run(two_rule_registry(), archive);

        assert_eq!(mappings.len(), 1, "only the class fact may be written");
        assert!(!mappings.contains("X m ()V"));
        assert_eq!(
            report.unresolved_provides[0].as_str(),
            "X m ()V"
        );
    }

    // One candidate resolves as usual.
    let archive = Archive::new(vec![class("a/bq", &["c"], &[])]);
    let (_, mappings, _) = run(two_rule_registry(), archive);
    assert!(mappings.contains("X m ()V"));
}

#[test]
fn test_monotonic_growth_across_rounds() {
    let archive = Archive::new(vec![class("a/bq", &["c"], &[])]);
    let classes = ClassCache::new(archive);
    let mappings = MappingDatabase::new();
    let diagnostics = Diagnostics::new();

    let report = DependencyScheduler::with_config(
        two_rule_registry(),
        ResolverConfig::new().with_round_snapshots(),
    )
    .run(&classes, &mappings, &diagnostics)
    .unwrap();

    // Key counts never shrink round over round.
    assert!(report
        .round_snapshots
        .windows(2)
        .all(|pair| pair[0] <= pair[1]));

    // Values are stable once present.
    assert_eq!(mappings.get_class("X").as_deref(), Some("a/bq"));
    assert!(!mappings.insert_class("X", "a/bq").unwrap());
    assert!(mappings.insert_class("X", "other").is_err());
    assert_eq!(mappings.get_class("X").as_deref(), Some("a/bq"));
}

#[test]
fn test_identical_inputs_give_identical_results() {
    let snapshot = |(report, mappings, _): (_, MappingDatabase, _)| {
        let facts: Vec<String> = mappings.facts().iter().map(ToString::to_string).collect();
        (facts, report)
    };

    let (facts_one, report_one) = snapshot(run(
        two_rule_registry(),
        Archive::new(vec![class("a/bq", &["c"], &[])]),
    ));
    let (facts_two, report_two) = snapshot(run(
        two_rule_registry(),
        Archive::new(vec![class("a/bq", &["c"], &[])]),
    ));

    assert_eq!(facts_one, facts_two);
    assert_eq!(report_one.rounds, report_two.rounds);
    assert_eq!(
        report_one.unresolved_provides,
        report_two.unresolved_provides
    );
}

#[test]
fn test_termination_with_unsatisfiable_dependencies() {
    // A circular pair and a free-floating unsatisfiable rule: the scheduler
    // must halt within |rules| rounds with everything pending.
    let registry = RuleRegistry::builder()
        .register(
            RuleDescriptor::builder("needs_b")
                .provides_class("A")
                .depends_class("B")
                .build(|_ctx| Ok(true)),
        )
        .register(
            RuleDescriptor::builder("needs_a")
                .provides_class("B")
                .depends_class("A")
                .build(|_ctx| Ok(true)),
        )
        .register(
            RuleDescriptor::builder("needs_ghost")
                .provides_class("C")
                .depends_class("Ghost")
                .build(|_ctx| Ok(true)),
        )
        .build();

    let (report, mappings, diagnostics) = run(registry, Archive::new(vec![]));

    assert!(report.rounds <= 3);
    assert!(mappings.is_empty());
    assert_eq!(report.unresolved_rules.len(), 3);
    assert_eq!(report.unresolved_provides.len(), 3);
    assert!(report
        .outcomes
        .iter()
        .all(|outcome| outcome.state == RuleState::Pending && outcome.attempts == 0));
    // Zero facts overall is surfaced as a severe diagnostic.
    assert!(diagnostics.has_errors());
}

#[test]
fn test_conflicting_rules_are_reported_not_hidden() {
    let registry = RuleRegistry::builder()
        .register(
            RuleDescriptor::builder("first_writer")
                .provides_class("X")
                .build(|ctx| {
                    ctx.mappings.insert_class("X", "a")?;
                    Ok(true)
                }),
        )
        .register(
            RuleDescriptor::builder("disagreeing_writer")
                .provides_class("X")
                .build(|ctx| {
                    ctx.mappings.insert_class("X", "b")?;
                    Ok(true)
                }),
        )
        .build();

    let (report, mappings, diagnostics) = run(registry, Archive::new(vec![]));

    // First writer wins; the disagreeing rule ends up errored and reported.
    assert_eq!(mappings.get_class("X").as_deref(), Some("a"));
    assert_eq!(report.outcomes[1].state, RuleState::Errored);
    assert!(diagnostics.has_errors());
}

#[test]
fn test_one_pass_can_yield_several_facts() {
    // A single rule discovering a class and one of its fields in the same pass.
    let registry = RuleRegistry::builder()
        .register(
            RuleDescriptor::builder("screen_and_title")
                .provides_class("ui/Screen")
                .provides_field("ui/Screen title Ljava/lang/String;")
                .build(|ctx| {
                    if !ctx.search_pool_for_strings("a/sc", &["screen.open"]) {
                        return Ok(false);
                    }
                    ctx.mappings.insert_class("ui/Screen", "a/sc")?;
                    ctx.mappings.insert_member(
                        "ui/Screen title Ljava/lang/String;",
                        "a/sc",
                        "t",
                        "Ljava/lang/String;",
                    )?;
                    Ok(true)
                }),
        )
        .build();

    let archive = Archive::new(vec![class("a/sc", &[], &["screen.open"])]);
    let (report, mappings, _) = run(registry, archive);

    assert_eq!(report.rounds, 1);
    assert_eq!(mappings.len(), 2);
    assert_eq!(report.satisfied_count(), 1);
}
