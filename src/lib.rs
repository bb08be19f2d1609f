// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # jarscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/jarscope.svg)](https://crates.io/crates/jarscope)
//! [![Documentation](https://docs.rs/jarscope/badge.svg)](https://docs.rs/jarscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/jarscope/blob/main/LICENSE-APACHE)
//!
//! A cross-platform engine for recovering symbolic class, method and field identity from
//! obfuscated JVM program archives. Built in pure Rust, `jarscope` matches structural and
//! textual bytecode fingerprints against a library of declarative detection rules and
//! maintains the resulting symbolic-name → binary-signature mapping, so mod-loading and
//! patching tools keep working even though the obfuscated names change every release.
//!
//! ## Features
//!
//! - **🧭 Stable symbolic names** - `"pkg/Class member descriptor"` keys that survive
//!   every release's renaming
//! - **🧩 Declarative detection rules** - rules declare the facts they provide and the
//!   facts they depend on; the engine works out execution order
//! - **🔁 Fixpoint scheduling** - rounds of ready rules until no new fact appears, with
//!   a provable termination bound
//! - **🔍 Falsifiable matching** - constant-pool fingerprints, instruction-sequence
//!   checks, and an engine-wide "ambiguous ⇒ no match" policy
//! - **🛡️ Conflict-checked facts** - first-writer-wins with every disagreeing write
//!   reported, never silently dropped
//! - **📊 Lenient diagnostics** - per-rule outcomes and unresolved summaries instead of
//!   hard failures
//!
//! ## Quick Start
//!
//! Add `jarscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! jarscope = "0.2"
//! ```
//!
//! ### Resolving a mapping
//!
//! ```rust
//! use std::sync::Arc;
//! use jarscope::prelude::*;
//!
//! // The archive loader is external; any ClassProvider will do.
//! struct Archive;
//! impl ClassProvider for Archive {
//!     fn load(&self, name: &str) -> jarscope::Result<Option<ClassModel>> {
//!         Ok((name == "a").then(|| ClassModel {
//!             name: "a".into(),
//!             super_name: Some("java/lang/Object".into()),
//!             interfaces: vec![],
//!             access: AccessFlags::PUBLIC,
//!             fields: vec![],
//!             methods: vec![],
//!             pool: ConstantPool::new(vec![PoolEntry::Utf8("Options".into())]),
//!         }))
//!     }
//! }
//!
//! // One rule: the options screen is the class carrying the "Options" UI string.
//! let registry = RuleRegistry::builder()
//!     .register(
//!         RuleDescriptor::builder("options_screen")
//!             .provides_class("ui/OptionsScreen")
//!             .build(|ctx| {
//!                 if ctx.search_pool_for_strings("a", &["Options"]) {
//!                     ctx.mappings.insert_class("ui/OptionsScreen", "a")?;
//!                     return Ok(true);
//!                 }
//!                 Ok(false)
//!             }),
//!     )
//!     .build();
//!
//! let classes = ClassCache::new(Arc::new(Archive));
//! let mappings = MappingDatabase::new();
//! let diagnostics = Diagnostics::new();
//!
//! let report = DependencyScheduler::new(registry).run(&classes, &mappings, &diagnostics)?;
//!
//! assert_eq!(mappings.get_class("ui/OptionsScreen").as_deref(), Some("a"));
//! assert!(report.unresolved_provides.is_empty());
//! # Ok::<(), jarscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `jarscope` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`metadata`] - Class models, constant pools, descriptors, and the class cache
//! - [`disassembler`] - The JVM opcode table and decoded instruction sequences
//! - [`matcher`] - Stateless signature-matching primitives rules are built from
//! - [`mapping`] - Symbolic names, binary signatures, and the fact store
//! - [`resolver`] - Rule registry, resolution context, and the fixpoint scheduler
//! - [`diagnostics`] - Severity/category diagnostics collection
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! ### Data Flow
//!
//! The [`resolver::RuleRegistry`] is populated once at startup from static rule
//! declarations. The [`resolver::DependencyScheduler`] reads the registry and the
//! [`mapping::MappingDatabase`] to pick ready rules; an executing rule loads classes
//! through the [`metadata::ClassCache`], tests candidates with [`matcher`] primitives,
//! and on success writes new facts back into the database. The loop ends at a fixpoint;
//! facts that never resolved are reported, not raised.
//!
//! ### Matching Philosophy
//!
//! Every primitive is total and side-effect-free: "no match" is `false`, `None` or an
//! empty collection. Candidate filters are followed by the engine-wide exactly-one
//! rule ([`matcher::exactly_one`]): ambiguous evidence never produces a fact, because
//! a wrong mapping is far more expensive than a missing one.

pub(crate) mod error;
#[cfg(test)]
pub(crate) mod test;

pub mod diagnostics;
pub mod disassembler;
pub mod mapping;
pub mod matcher;
pub mod metadata;
pub mod prelude;
pub mod resolver;

/// The result type used by all fallible operations in this library.
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;
