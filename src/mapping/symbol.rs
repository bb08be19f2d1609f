//! Symbolic names and binary signatures: the two sides of a mapping fact.
//!
//! A [`SymbolicName`] is the stable, version-independent key consumers depend on; a
//! [`BinarySignature`] is the concrete (obfuscated, version-specific) name found in the
//! current build. Both follow the whitespace-separated line format: a bare internal
//! name for classes, `"owner name descriptor"` for members.

use std::fmt;

use crate::{metadata::MemberRef, Error, Result};

/// Stable symbolic key identifying a class, field or method.
///
/// Classes are `"ns/ClassPurpose"`; members are
/// `"ns/ClassPurpose memberPurpose descriptor"`. The key is opaque to the
/// engine; only equality, ordering, and the member/class distinction matter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolicName(String);

impl SymbolicName {
    /// Creates a symbolic name from its line form.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the line form of the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this names a field or method rather than a class.
    ///
    /// Member keys carry whitespace (owner, member, descriptor); class keys
    /// are a single token.
    #[must_use]
    pub fn is_member(&self) -> bool {
        self.0.contains(char::is_whitespace)
    }
}

impl fmt::Display for SymbolicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for SymbolicName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SymbolicName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SymbolicName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// The resolved, concrete side of a fact: a binary class name or member signature.
///
/// Immutable once written to the database; first-writer-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinarySignature {
    /// A class resolution: the binary internal name of the class.
    Class(String),
    /// A member resolution: binary owner, binary member name, and descriptor.
    Member(MemberRef),
}

impl BinarySignature {
    /// Creates a class signature.
    pub fn class(binary_name: impl Into<String>) -> Self {
        Self::Class(binary_name.into())
    }

    /// Creates a member signature.
    ///
    /// # Arguments
    ///
    /// * `owner` - Binary internal name of the owning class
    /// * `name` - Binary member name
    /// * `descriptor` - Member descriptor
    pub fn member(
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        Self::Member(MemberRef::new(owner, name, descriptor))
    }

    /// Parses a signature from its line form.
    ///
    /// One token parses as a class, three as a member.
    ///
    /// # Arguments
    ///
    /// * `line` - The whitespace-separated line
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSymbol`] for any other token count.
    pub fn parse_line(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [class] => Ok(Self::Class((*class).to_string())),
            [owner, name, descriptor] => {
                Ok(Self::Member(MemberRef::new(*owner, *name, *descriptor)))
            }
            _ => Err(Error::MalformedSymbol(line.to_string())),
        }
    }

    /// Returns the binary class name if this is a class signature.
    #[must_use]
    pub fn as_class(&self) -> Option<&str> {
        match self {
            Self::Class(name) => Some(name),
            Self::Member(_) => None,
        }
    }

    /// Returns the member reference if this is a member signature.
    #[must_use]
    pub fn as_member(&self) -> Option<&MemberRef> {
        match self {
            Self::Class(_) => None,
            Self::Member(member) => Some(member),
        }
    }
}

impl fmt::Display for BinarySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(name) => write!(f, "{name}"),
            Self::Member(member) => write!(f, "{member}"),
        }
    }
}

/// One resolved mapping: a symbolic name bound to its binary signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    /// The stable symbolic key.
    pub symbol: SymbolicName,
    /// The concrete resolution in the current build.
    pub signature: BinarySignature,
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_name_kinds() {
        assert!(!SymbolicName::from("ns/Window").is_member());
        assert!(SymbolicName::from("ns/Window getTitle ()Ljava/lang/String;").is_member());
    }

    #[test]
    fn test_signature_parse_class() {
        let signature = BinarySignature::parse_line("a/bq").unwrap();
        assert_eq!(signature.as_class(), Some("a/bq"));
        assert_eq!(signature.to_string(), "a/bq");
    }

    #[test]
    fn test_signature_parse_member() {
        let signature = BinarySignature::parse_line("a/bq c ()V").unwrap();
        assert_eq!(
            signature.as_member(),
            Some(&MemberRef::new("a/bq", "c", "()V"))
        );
        assert_eq!(signature.to_string(), "a/bq c ()V");
    }

    #[test]
    fn test_signature_parse_rejects_wrong_arity() {
        assert!(BinarySignature::parse_line("").is_err());
        assert!(BinarySignature::parse_line("a b").is_err());
        assert!(BinarySignature::parse_line("a b c d").is_err());
    }
}
