//! Wildcarded member queries and the exactly-one disambiguation rule.
//!
//! [`matching_methods`] / [`matching_fields`] are the workhorse filters rules narrow
//! candidates with; [`exactly_one`] encodes the engine-wide policy that a fact is only
//! written when precisely one candidate survives the filter. Zero candidates is missing
//! evidence; two or more is ambiguity. Both mean "no fact," never an error.

use crate::metadata::{AccessFlags, ClassModel, FieldModel, MethodModel};

/// Filter for member lookups; `None` in any position is a wildcard.
///
/// Access flags match by containment: the member must carry at least the
/// given flags, extra flags are ignored.
///
/// # Example
///
/// ```rust
/// use jarscope::matcher::MemberQuery;
/// use jarscope::metadata::AccessFlags;
///
/// // "any static method returning our resolved type, regardless of name"
/// let query = MemberQuery::new()
///     .descriptor("()Lx/Y;")
///     .access(AccessFlags::STATIC);
/// # let _ = query;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberQuery<'a> {
    /// Exact member name, or `None` for any.
    pub name: Option<&'a str>,
    /// Exact descriptor, or `None` for any.
    pub descriptor: Option<&'a str>,
    /// Required access flags (containment), or `None` for any.
    pub access: Option<AccessFlags>,
}

impl<'a> MemberQuery<'a> {
    /// Creates an all-wildcard query matching every member.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires an exact member name.
    #[must_use]
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Requires an exact descriptor.
    #[must_use]
    pub fn descriptor(mut self, descriptor: &'a str) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    /// Requires the member to carry at least the given access flags.
    #[must_use]
    pub fn access(mut self, access: AccessFlags) -> Self {
        self.access = Some(access);
        self
    }

    fn matches(&self, name: &str, descriptor: &str, access: AccessFlags) -> bool {
        self.name.is_none_or(|n| n == name)
            && self.descriptor.is_none_or(|d| d == descriptor)
            && self.access.is_none_or(|a| access.contains(a))
    }
}

/// Returns all methods of the class matching the query, in declaration order.
///
/// # Arguments
///
/// * `class` - The class to search
/// * `query` - Name/descriptor/access filters; wildcards match anything
#[must_use]
pub fn matching_methods<'c>(class: &'c ClassModel, query: &MemberQuery<'_>) -> Vec<&'c MethodModel> {
    class
        .methods
        .iter()
        .filter(|m| query.matches(&m.name, &m.descriptor, m.access))
        .collect()
}

/// Returns all fields of the class matching the query, in declaration order.
///
/// # Arguments
///
/// * `class` - The class to search
/// * `query` - Name/descriptor/access filters; wildcards match anything
#[must_use]
pub fn matching_fields<'c>(class: &'c ClassModel, query: &MemberQuery<'_>) -> Vec<&'c FieldModel> {
    class
        .fields
        .iter()
        .filter(|f| query.matches(&f.name, &f.descriptor, f.access))
        .collect()
}

/// Returns the sole element of a candidate list, or `None` for 0 or ≥2 candidates.
///
/// This is the engine-wide disambiguation rule: ambiguous evidence must never
/// produce a fact. Works on any candidate slice so rules can apply it after
/// their own narrowing steps too.
///
/// # Arguments
///
/// * `candidates` - The filtered candidate list
#[must_use]
pub fn exactly_one<T: Copy>(candidates: &[T]) -> Option<T> {
    match candidates {
        [single] => Some(*single),
        _ => None,
    }
}
