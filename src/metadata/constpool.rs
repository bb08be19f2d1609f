//! Constant-pool view of a compiled class.
//!
//! The constant pool is the set of literal values embedded in a class file, searchable
//! independent of which instruction uses them. It is the most durable fingerprint an
//! obfuscated class carries: renaming rewrites code identifiers but leaves UI strings,
//! magic numbers and referenced member signatures intact.
//!
//! # Key Components
//!
//! - [`ConstantPool`] - Read-only pool owned by a `ClassModel`
//! - [`PoolEntry`] - One literal value or reference in the pool
//!
//! All queries are total: absence is `false` or an empty iterator, never an error.

use crate::metadata::member::MemberRef;

/// One entry of a class's constant pool.
///
/// Only the entry kinds relevant to structural matching are modeled; structural
/// bookkeeping entries of the class-file format (name-and-type, method handles,
/// bootstrap arguments) are resolved away by the class provider.
#[derive(Debug, Clone, PartialEq)]
pub enum PoolEntry {
    /// A string literal (`CONSTANT_Utf8` reachable from a `CONSTANT_String`).
    Utf8(String),
    /// A 32-bit integer literal.
    Integer(i32),
    /// A 64-bit integer literal.
    Long(i64),
    /// A 32-bit float literal.
    Float(f32),
    /// A 64-bit float literal.
    Double(f64),
    /// A class reference by internal name.
    ClassRef(String),
    /// A field reference (owner, name, descriptor).
    FieldRef(MemberRef),
    /// A method reference (owner, name, descriptor).
    MethodRef(MemberRef),
}

/// Read-only constant pool of one loaded class.
///
/// Constructed once by the class provider and never mutated. Entry order carries no
/// meaning; every query is a containment or collection scan.
///
/// # Example
///
/// ```rust
/// use jarscope::metadata::{ConstantPool, PoolEntry};
///
/// let pool = ConstantPool::new(vec![
///     PoolEntry::Utf8("Options".into()),
///     PoolEntry::ClassRef("a/b".into()),
/// ]);
///
/// assert!(pool.contains_utf8("Options"));
/// assert!(pool.contains_class("a/b"));
/// assert!(!pool.contains_utf8("Controls"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstantPool {
    entries: Vec<PoolEntry>,
}

impl ConstantPool {
    /// Creates a pool from its entries.
    #[must_use]
    pub fn new(entries: Vec<PoolEntry>) -> Self {
        Self { entries }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the pool has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all entries.
    pub fn entries(&self) -> impl Iterator<Item = &PoolEntry> {
        self.entries.iter()
    }

    /// Returns true if the given string literal occurs in the pool.
    ///
    /// # Arguments
    ///
    /// * `literal` - The exact string to look for
    #[must_use]
    pub fn contains_utf8(&self, literal: &str) -> bool {
        self.strings().any(|s| s == literal)
    }

    /// Returns true if the given integer literal occurs in the pool.
    #[must_use]
    pub fn contains_integer(&self, value: i32) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, PoolEntry::Integer(v) if *v == value))
    }

    /// Returns true if the pool references the class with the given internal name.
    ///
    /// # Arguments
    ///
    /// * `internal_name` - Binary internal name (e.g. `java/util/List`)
    #[must_use]
    pub fn contains_class(&self, internal_name: &str) -> bool {
        self.class_refs().any(|c| c == internal_name)
    }

    /// Returns true if the pool references the given field signature.
    ///
    /// # Arguments
    ///
    /// * `field` - Owner, name and descriptor of the field
    #[must_use]
    pub fn contains_field_ref(&self, field: &MemberRef) -> bool {
        self.field_refs().any(|f| f == field)
    }

    /// Returns true if the pool references the given method signature.
    ///
    /// # Arguments
    ///
    /// * `method` - Owner, name and descriptor of the method
    #[must_use]
    pub fn contains_method_ref(&self, method: &MemberRef) -> bool {
        self.method_refs().any(|m| m == method)
    }

    /// Returns an iterator over the string literals in the pool.
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            PoolEntry::Utf8(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Returns an iterator over the class references in the pool.
    pub fn class_refs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            PoolEntry::ClassRef(c) => Some(c.as_str()),
            _ => None,
        })
    }

    /// Returns an iterator over the field references in the pool.
    pub fn field_refs(&self) -> impl Iterator<Item = &MemberRef> {
        self.entries.iter().filter_map(|e| match e {
            PoolEntry::FieldRef(f) => Some(f),
            _ => None,
        })
    }

    /// Returns an iterator over the method references in the pool.
    pub fn method_refs(&self) -> impl Iterator<Item = &MemberRef> {
        self.entries.iter().filter_map(|e| match e {
            PoolEntry::MethodRef(m) => Some(m),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pool() -> ConstantPool {
        ConstantPool::new(vec![
            PoolEntry::Utf8("A".into()),
            PoolEntry::Utf8("B".into()),
            PoolEntry::Integer(1234),
            PoolEntry::ClassRef("x/Y".into()),
            PoolEntry::FieldRef(MemberRef::new("x/Y", "f", "I")),
            PoolEntry::MethodRef(MemberRef::new("x/Y", "m", "()V")),
        ])
    }

    #[test]
    fn test_utf8_containment() {
        let pool = sample_pool();
        assert!(pool.contains_utf8("A"));
        assert!(pool.contains_utf8("B"));
        assert!(!pool.contains_utf8("C"));
    }

    #[test]
    fn test_reference_containment() {
        let pool = sample_pool();
        assert!(pool.contains_class("x/Y"));
        assert!(pool.contains_field_ref(&MemberRef::new("x/Y", "f", "I")));
        assert!(!pool.contains_field_ref(&MemberRef::new("x/Y", "f", "J")));
        assert!(pool.contains_method_ref(&MemberRef::new("x/Y", "m", "()V")));
        assert!(pool.contains_integer(1234));
        assert!(!pool.contains_integer(4321));
    }

    #[test]
    fn test_iterators() {
        let pool = sample_pool();
        assert_eq!(pool.strings().count(), 2);
        assert_eq!(pool.class_refs().count(), 1);
        assert_eq!(pool.field_refs().count(), 1);
        assert_eq!(pool.method_refs().count(), 1);
        assert_eq!(pool.len(), 6);
    }
}
