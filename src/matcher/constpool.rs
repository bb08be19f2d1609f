//! Constant-pool fingerprint searches.
//!
//! A class's constant pool survives identifier renaming: UI strings, log messages and
//! referenced member signatures stay put while every code name changes. These searches
//! are the cheapest and most reliable anchor a detection rule has, and they are
//! conjunctive: *every* given needle must be present for a match.

use crate::metadata::{ClassModel, MemberRef};

/// Returns true iff every given string literal appears in the class's constant pool.
///
/// Order of appearance is irrelevant. An empty needle set matches trivially.
///
/// # Arguments
///
/// * `class` - The class to fingerprint
/// * `literals` - String literals that must all be present
///
/// # Example
///
/// ```rust
/// use jarscope::matcher::search_pool_for_strings;
/// use jarscope::metadata::{ClassModel, ConstantPool, PoolEntry, AccessFlags};
///
/// # let class = ClassModel {
/// #     name: "a".into(), super_name: None, interfaces: vec![],
/// #     access: AccessFlags::PUBLIC, fields: vec![], methods: vec![],
/// #     pool: ConstantPool::new(vec![
/// #         PoolEntry::Utf8("A".into()), PoolEntry::Utf8("B".into()),
/// #     ]),
/// # };
/// assert!(search_pool_for_strings(&class, &["A", "B"]));
/// assert!(!search_pool_for_strings(&class, &["A", "D"]));
/// ```
#[must_use]
pub fn search_pool_for_strings(class: &ClassModel, literals: &[&str]) -> bool {
    literals
        .iter()
        .all(|literal| class.pool.contains_utf8(literal))
}

/// Returns true iff the class's bytecode references every given field signature.
///
/// Used when a class carries no unique literal but touches an already-resolved
/// field that only it uses.
///
/// # Arguments
///
/// * `class` - The class to fingerprint
/// * `fields` - Field references (owner, name, descriptor) that must all be present
#[must_use]
pub fn search_pool_for_fields(class: &ClassModel, fields: &[MemberRef]) -> bool {
    fields.iter().all(|field| class.pool.contains_field_ref(field))
}

/// Returns true iff the class's constant pool references every given class.
///
/// The class-reference analogue of [`search_pool_for_strings`]; useful once a
/// few types are resolved and a candidate is expected to mention all of them.
///
/// # Arguments
///
/// * `class` - The class to fingerprint
/// * `internal_names` - Binary internal names that must all be referenced
#[must_use]
pub fn search_pool_for_classes(class: &ClassModel, internal_names: &[&str]) -> bool {
    internal_names
        .iter()
        .all(|name| class.pool.contains_class(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::class_fixture;

    #[test]
    fn test_string_search_is_conjunctive() {
        let class = class_fixture("a")
            .pool_strings(&["A", "B", "C"])
            .build();

        assert!(search_pool_for_strings(&class, &["A"]));
        assert!(search_pool_for_strings(&class, &["A", "B"]));
        assert!(search_pool_for_strings(&class, &["C", "A", "B"]));
        assert!(!search_pool_for_strings(&class, &["A", "D"]));
        assert!(!search_pool_for_strings(&class, &["D"]));
        assert!(search_pool_for_strings(&class, &[]));
    }

    #[test]
    fn test_field_search() {
        let needle = MemberRef::new("x/Y", "state", "I");
        let class = class_fixture("a").pool_field_ref(needle.clone()).build();

        assert!(search_pool_for_fields(&class, &[needle.clone()]));
        assert!(!search_pool_for_fields(
            &class,
            &[needle, MemberRef::new("x/Y", "other", "I")]
        ));
    }

    #[test]
    fn test_class_search() {
        let class = class_fixture("a").pool_class_refs(&["x/Y", "x/Z"]).build();

        assert!(search_pool_for_classes(&class, &["x/Y", "x/Z"]));
        assert!(!search_pool_for_classes(&class, &["x/Y", "x/Q"]));
    }
}
