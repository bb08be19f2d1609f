//! The mapping fact model and the resolved-fact store.
//!
//! A **fact** binds a stable [`SymbolicName`] to the [`BinarySignature`] found in the
//! current program build. The [`MappingDatabase`] holds all facts of a run with
//! first-writer-wins semantics; it is the only mutable state detection rules touch.
//!
//! # Key Components
//!
//! - [`SymbolicName`] - Stable, version-independent key (line format)
//! - [`BinarySignature`] - Concrete class name or member signature of this build
//! - [`Fact`] - One resolved pair
//! - [`MappingDatabase`] - Monotonic, conflict-checked fact store

mod database;
mod symbol;

pub use database::MappingDatabase;
pub use symbol::{BinarySignature, Fact, SymbolicName};
