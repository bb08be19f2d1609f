//! Read-only in-memory view of one compiled class.
//!
//! A [`ClassModel`] is what every matching primitive and detection rule queries: name,
//! superclass, interfaces, fields, methods with their linear instruction sequences, and
//! the constant pool. Models are constructed once by the class provider, shared as
//! [`ClassRc`] through the process-wide cache, and never mutated afterwards.

use std::sync::Arc;

use crate::{
    disassembler::Instruction,
    metadata::{constpool::ConstantPool, flags::AccessFlags},
};

/// Reference-counted handle to a loaded class.
///
/// All lookups of the same binary name through one cache return clones of the
/// same `Arc`, so models are pointer-identical across rules in a run.
pub type ClassRc = Arc<ClassModel>;

/// One field of a loaded class.
#[derive(Debug, Clone)]
pub struct FieldModel {
    /// Field name as found in the current build (obfuscated).
    pub name: String,
    /// Field descriptor in JVM syntax.
    pub descriptor: String,
    /// Access flags.
    pub access: AccessFlags,
}

/// One method of a loaded class, with its decoded instruction sequence.
#[derive(Debug, Clone)]
pub struct MethodModel {
    /// Method name as found in the current build (obfuscated).
    pub name: String,
    /// Method descriptor in JVM syntax.
    pub descriptor: String,
    /// Access flags.
    pub access: AccessFlags,
    /// Linear instruction sequence in bytecode order.
    ///
    /// Indexable; matching works with plain integer positions and
    /// bounds-checked lookahead instead of node pointers.
    pub instructions: Vec<Instruction>,
}

impl MethodModel {
    /// Returns the instruction at `index`, if in bounds.
    #[must_use]
    pub fn instruction(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Returns true if the method has no decoded body (abstract or native).
    #[must_use]
    pub fn is_bodyless(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Read-only view of one compiled class.
///
/// # Lifecycle
///
/// Constructed by a [`crate::metadata::ClassProvider`] when a class is first
/// loaded by name, then owned by the [`crate::metadata::ClassCache`]. Everything
/// here is immutable; rules only read.
#[derive(Debug, Clone)]
pub struct ClassModel {
    /// Binary internal name of the class (e.g. `a/bq`).
    pub name: String,
    /// Binary internal name of the superclass; `None` for `java/lang/Object` itself.
    pub super_name: Option<String>,
    /// Implemented interfaces, in declaration order.
    pub interfaces: Vec<String>,
    /// Access flags.
    pub access: AccessFlags,
    /// Declared fields, in declaration order.
    pub fields: Vec<FieldModel>,
    /// Declared methods, in declaration order.
    pub methods: Vec<MethodModel>,
    /// The constant pool of the class.
    pub pool: ConstantPool,
}

impl ClassModel {
    /// Returns the binary internal name of the class.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the class directly extends the given internal name.
    ///
    /// # Arguments
    ///
    /// * `internal_name` - Superclass internal name to test
    #[must_use]
    pub fn extends(&self, internal_name: &str) -> bool {
        self.super_name.as_deref() == Some(internal_name)
    }

    /// Returns true if the class directly implements the given interface.
    ///
    /// # Arguments
    ///
    /// * `internal_name` - Interface internal name to test
    #[must_use]
    pub fn implements(&self, internal_name: &str) -> bool {
        self.interfaces.iter().any(|i| i == internal_name)
    }

    /// Looks up a field by exact name and descriptor.
    #[must_use]
    pub fn field(&self, name: &str, descriptor: &str) -> Option<&FieldModel> {
        self.fields
            .iter()
            .find(|f| f.name == name && f.descriptor == descriptor)
    }

    /// Looks up a method by exact name and descriptor.
    #[must_use]
    pub fn method(&self, name: &str, descriptor: &str) -> Option<&MethodModel> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.descriptor == descriptor)
    }
}
