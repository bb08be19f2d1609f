//! # jarscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the jarscope library. Import this module to get quick access to the essential
//! types for writing detection rules and driving a resolution run.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all jarscope operations
pub use crate::Error;

/// The result type used throughout jarscope
pub use crate::Result;

// ================================================================================================
// Metadata and Class Loading
// ================================================================================================

/// Read-only class structure models
pub use crate::metadata::{ClassModel, ClassRc, FieldModel, MethodModel};

/// JVM access-flag masks
pub use crate::metadata::AccessFlags;

/// Owner/name/descriptor member references
pub use crate::metadata::MemberRef;

/// Constant pool view and entries
pub use crate::metadata::{ConstantPool, PoolEntry};

/// Descriptor parsing and template assembly
pub use crate::metadata::{assemble_descriptor, DescriptorPart, MethodDescriptor, TypeDescriptor};

/// External loader seam and the process-wide class cache
pub use crate::metadata::{ClassCache, ClassProvider};

// ================================================================================================
// Instruction Model
// ================================================================================================

/// Decoded instructions and the opcode table
pub use crate::disassembler::{InsnKind, Instruction, Opcode, Operand};

// ================================================================================================
// Matching Primitives
// ================================================================================================

/// Member filters and the exactly-one disambiguation rule
pub use crate::matcher::{exactly_one, matching_fields, matching_methods, MemberQuery};

/// Constant-pool fingerprints
pub use crate::matcher::{search_pool_for_fields, search_pool_for_strings};

/// Frequency-vote disambiguation
pub use crate::matcher::TallyKeeper;

// ================================================================================================
// Mapping Facts
// ================================================================================================

/// The resolved-fact store and the fact model
pub use crate::mapping::{BinarySignature, Fact, MappingDatabase, SymbolicName};

// ================================================================================================
// Resolution Engine
// ================================================================================================

/// Rule declaration surface
pub use crate::resolver::{RuleDescriptor, RuleRegistry};

/// The fixpoint driver and its collaborators
pub use crate::resolver::{
    DependencyScheduler, ResolutionContext, ResolutionReport, ResolverConfig,
};

/// Diagnostics sink and categories
pub use crate::diagnostics::{DiagnosticCategory, Diagnostics};
