//! Owner/name/descriptor triples identifying a field or method.
//!
//! A [`MemberRef`] is the unit both sides of the mapping speak: constant pools embed them
//! as field/method references, instruction operands carry them, and resolved member facts
//! are stored as one. The textual form is the whitespace-separated line format
//! `"owner name descriptor"` that external consumers split on.

use std::fmt;

use crate::{Error, Result};

/// A reference to a field or method: owning class, member name, and descriptor.
///
/// The same shape is used for symbolic references (stable names) and binary references
/// (the obfuscated names of the current program build); only the context decides which
/// side of the mapping a value belongs to.
///
/// # Example
///
/// ```rust
/// use jarscope::metadata::MemberRef;
///
/// let parsed = MemberRef::parse_line("ns/Window getTitle ()Ljava/lang/String;").unwrap();
/// assert_eq!(parsed.owner, "ns/Window");
/// assert_eq!(parsed.name, "getTitle");
/// assert_eq!(parsed.to_string(), "ns/Window getTitle ()Ljava/lang/String;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberRef {
    /// Internal name of the class owning the member (e.g. `ns/Window`).
    pub owner: String,
    /// Name of the field or method.
    pub name: String,
    /// Field or method descriptor in JVM syntax (e.g. `(Ljava/lang/String;I)V`).
    pub descriptor: String,
}

impl MemberRef {
    /// Creates a member reference from its three components.
    ///
    /// # Arguments
    ///
    /// * `owner` - Internal name of the owning class
    /// * `name` - Member name
    /// * `descriptor` - JVM field or method descriptor
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }

    /// Parses the whitespace-separated line format `"owner name descriptor"`.
    ///
    /// # Arguments
    ///
    /// * `line` - A member line with exactly three whitespace-separated tokens
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSymbol`] if the line does not split into
    /// exactly three tokens.
    pub fn parse_line(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(owner), Some(name), Some(descriptor), None) => {
                Ok(Self::new(owner, name, descriptor))
            }
            _ => Err(Error::MalformedSymbol(line.to_string())),
        }
    }

    /// Returns true if the descriptor is a method descriptor (starts with `(`).
    #[must_use]
    pub fn is_method(&self) -> bool {
        self.descriptor.starts_with('(')
    }
}

impl fmt::Display for MemberRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.owner, self.name, self.descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_roundtrip() {
        let line = "a b (I)V";
        let member = MemberRef::parse_line(line).unwrap();
        assert_eq!(member, MemberRef::new("a", "b", "(I)V"));
        assert_eq!(member.to_string(), line);
    }

    #[test]
    fn test_parse_line_wrong_arity() {
        assert!(MemberRef::parse_line("a b").is_err());
        assert!(MemberRef::parse_line("a b (I)V extra").is_err());
        assert!(MemberRef::parse_line("").is_err());
    }

    #[test]
    fn test_member_kind() {
        assert!(MemberRef::new("a", "m", "()V").is_method());
        assert!(!MemberRef::new("a", "f", "I").is_method());
    }
}
