//! Read-only class metadata: models, constant pools, descriptors, and the class cache.
//!
//! This module is the leaf of the engine: everything else queries it and nothing here
//! queries back. A [`ClassModel`] is the in-memory view of one compiled class; the
//! [`ClassCache`] owns all models for a run and guarantees load-once, pointer-identical
//! sharing; descriptors and [`MemberRef`]s are the textual type vocabulary the mapping
//! line format is built from.
//!
//! # Key Components
//!
//! - [`ClassModel`], [`FieldModel`], [`MethodModel`] - Read-only structure of one class
//! - [`ConstantPool`], [`PoolEntry`] - Literal values embedded in a class
//! - [`AccessFlags`] - JVM access masks
//! - [`MemberRef`] - Owner/name/descriptor triple, line-format parse and display
//! - [`MethodDescriptor`], [`TypeDescriptor`], [`assemble_descriptor`] - Descriptor handling
//! - [`ClassProvider`], [`ClassCache`] - External loader seam and process-wide cache

mod class;
mod constpool;
mod descriptor;
mod flags;
mod loader;
mod member;

pub use class::{ClassModel, ClassRc, FieldModel, MethodModel};
pub use constpool::{ConstantPool, PoolEntry};
pub use descriptor::{
    assemble_descriptor, parse_field_descriptor, DescriptorPart, MethodDescriptor, PrimitiveKind,
    TypeDescriptor,
};
pub use flags::AccessFlags;
pub use loader::{ClassCache, ClassProvider};
pub use member::MemberRef;
