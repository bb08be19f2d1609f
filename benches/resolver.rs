//! Benchmarks for the matching primitives and the fixpoint scheduler.
//!
//! Exercises the two hot paths of a resolution run: constant-pool fingerprint
//! searches (executed by nearly every rule) and a full scheduler run over a
//! dependency chain of rules.

use std::collections::HashMap;
use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use jarscope::{
    diagnostics::Diagnostics,
    mapping::MappingDatabase,
    matcher::search_pool_for_strings,
    metadata::{AccessFlags, ClassCache, ClassModel, ClassProvider, ConstantPool, PoolEntry},
    resolver::{DependencyScheduler, RuleDescriptor, RuleRegistry},
    Result,
};

struct Archive {
    classes: HashMap<String, ClassModel>,
}

impl ClassProvider for Archive {
    fn load(&self, binary_name: &str) -> Result<Option<ClassModel>> {
        Ok(self.classes.get(binary_name).cloned())
    }
}

fn pool_class(name: &str, strings: usize) -> ClassModel {
    ClassModel {
        name: name.to_string(),
        super_name: Some("java/lang/Object".to_string()),
        interfaces: vec![],
        access: AccessFlags::PUBLIC,
        fields: vec![],
        methods: vec![],
        pool: ConstantPool::new(
            (0..strings)
                .map(|i| PoolEntry::Utf8(format!("string.{i}")))
                .collect(),
        ),
    }
}

fn bench_pool_search(c: &mut Criterion) {
    let class = pool_class("a/bq", 512);

    c.bench_function("search_pool_for_strings", |b| {
        b.iter(|| {
            // Worst case: the last literal sits at the end of the pool.
            black_box(search_pool_for_strings(
                black_box(&class),
                &["string.0", "string.511"],
            ))
        });
    });
}

/// Build a registry of `n` rules where rule i depends on rule i-1's class,
/// forcing one scheduling round per rule.
fn chain_registry(n: usize) -> RuleRegistry {
    let mut builder = RuleRegistry::builder();
    for i in 0..n {
        let mut rule = RuleDescriptor::builder(format!("link_{i}"))
            .provides_class(format!("chain/C{i}"));
        if i > 0 {
            rule = rule.depends_class(format!("chain/C{}", i - 1));
        }
        builder = builder.register(rule.build(move |ctx| {
            ctx.mappings
                .insert_class(format!("chain/C{i}"), format!("c{i}"))?;
            Ok(true)
        }));
    }
    builder.build()
}

fn bench_scheduler_chain(c: &mut Criterion) {
    let archive = Arc::new(Archive {
        classes: HashMap::new(),
    });

    c.bench_function("scheduler_chain_16", |b| {
        b.iter(|| {
            let classes = ClassCache::new(archive.clone());
            let mappings = MappingDatabase::new();
            let diagnostics = Diagnostics::new();
            let report = DependencyScheduler::new(chain_registry(16))
                .run(&classes, &mappings, &diagnostics)
                .unwrap();
            black_box(report.facts_resolved)
        });
    });
}

criterion_group!(benches, bench_pool_search, bench_scheduler_chain);
criterion_main!(benches);
