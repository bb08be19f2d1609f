//! Stateless signature-matching primitives.
//!
//! Detection rules are built from a small vocabulary of pure functions over
//! [`crate::metadata::ClassModel`]s: constant-pool fingerprints, wildcarded member
//! queries, bounded instruction-sequence checks, and frequency votes. None of them
//! mutate state, and all of them are total: "no match" is `false`, `None` or an
//! empty collection, never an error.
//!
//! # Key Components
//!
//! - [`search_pool_for_strings`] / [`search_pool_for_fields`] /
//!   [`search_pool_for_classes`] - Conjunctive constant-pool fingerprints
//! - [`MemberQuery`], [`matching_methods`], [`matching_fields`] - Wildcarded filters
//! - [`exactly_one`] - The engine-wide single-candidate disambiguation rule
//! - [`match_opcode_sequence`], [`opcode_sequence`] - Exact patterns at a position
//! - [`next_insn_of_kind`], [`insns_of_kind`] - Forward scans by instruction kind
//! - [`find_ldc_string`], [`find_ldc_int`] - Literal anchors
//! - [`infer_getter`] - Trivial getter-shape recognition
//! - [`TallyKeeper`] - Deterministic majority vote
//!
//! # Example
//!
//! ```rust
//! use jarscope::matcher::{exactly_one, matching_methods, MemberQuery};
//! # use jarscope::metadata::{AccessFlags, ClassModel, ConstantPool};
//! # let class = ClassModel {
//! #     name: "a".into(), super_name: None, interfaces: vec![],
//! #     access: AccessFlags::PUBLIC, fields: vec![],
//! #     methods: vec![], pool: ConstantPool::default(),
//! # };
//!
//! // A fact is only trusted when exactly one candidate survives the filter.
//! let candidates = matching_methods(&class, &MemberQuery::new().descriptor("()V"));
//! if let Some(init) = exactly_one(&candidates) {
//!     println!("found {}", init.name);
//! }
//! ```

mod constpool;
mod insn;
mod members;
mod tally;

pub use constpool::{search_pool_for_classes, search_pool_for_fields, search_pool_for_strings};
pub use insn::{
    find_ldc_int, find_ldc_string, infer_getter, insns_of_kind, match_opcode_sequence,
    next_insn_of_kind, opcode_sequence,
};
pub use members::{exactly_one, matching_fields, matching_methods, MemberQuery};
pub use tally::TallyKeeper;
