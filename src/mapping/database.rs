//! The resolved-fact store.
//!
//! The [`MappingDatabase`] is the single shared state of a resolution run: symbolic
//! name → binary signature, first-writer-wins, monotonic. There is deliberately no
//! removal or overwrite API: once a fact is in, it stays, and a disagreeing second
//! write is a reported conflict, never a silent replacement.

use std::sync::Arc;

use crossbeam_skiplist::SkipMap;

use crate::{
    diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics},
    mapping::symbol::{BinarySignature, Fact, SymbolicName},
    metadata::{ClassCache, ClassRc, MemberRef},
    Error, Result,
};

/// Mapping of symbolic names to their resolved binary signatures.
///
/// Keys are unique and values immutable once written. The store is ordered by
/// symbolic name, so iteration (and therefore every report built from it) is
/// deterministic regardless of rule execution history.
///
/// # Example
///
/// ```rust
/// use jarscope::mapping::MappingDatabase;
///
/// let db = MappingDatabase::new();
/// db.insert_class("ns/Window", "a").unwrap();
/// db.insert_member("ns/Window getTitle ()Ljava/lang/String;", "a", "b", "()Ljava/lang/String;")
///     .unwrap();
///
/// assert!(db.contains("ns/Window"));
/// assert_eq!(db.get_class("ns/Window").as_deref(), Some("a"));
/// assert_eq!(db.len(), 2);
/// ```
#[derive(Default)]
pub struct MappingDatabase {
    facts: SkipMap<SymbolicName, BinarySignature>,
    diagnostics: Option<Arc<Diagnostics>>,
}

impl MappingDatabase {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self {
            facts: SkipMap::new(),
            diagnostics: None,
        }
    }

    /// Creates an empty database that reports conflicts to a diagnostics sink.
    ///
    /// # Arguments
    ///
    /// * `diagnostics` - Sink receiving a `Mapping`-category error per conflict
    #[must_use]
    pub fn with_diagnostics(diagnostics: Arc<Diagnostics>) -> Self {
        Self {
            facts: SkipMap::new(),
            diagnostics: Some(diagnostics),
        }
    }

    /// Inserts a fact if its key is absent.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The symbolic name being resolved
    /// * `signature` - The binary signature it resolves to
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the fact is new, `Ok(false)` if an identical fact was
    /// already present (idempotent re-assertion).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the key is present with a *different*
    /// signature. The existing value is kept, and the conflict is recorded to
    /// the diagnostics sink. A disagreeing second write means one of the
    /// rules matched on a broken assumption and must not be hidden.
    pub fn insert(
        &self,
        symbol: impl Into<SymbolicName>,
        signature: BinarySignature,
    ) -> Result<bool> {
        let symbol = symbol.into();

        if let Some(existing) = self.facts.get(&symbol) {
            if *existing.value() == signature {
                return Ok(false);
            }

            let error = Error::Conflict {
                symbol: symbol.to_string(),
                existing: existing.value().to_string(),
                attempted: signature.to_string(),
            };
            if let Some(diagnostics) = &self.diagnostics {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticSeverity::Error,
                        DiagnosticCategory::Mapping,
                        error.to_string(),
                    )
                    .with_symbol(symbol.as_str()),
                );
            }
            return Err(error);
        }

        self.facts.insert(symbol, signature);
        Ok(true)
    }

    /// Inserts a class fact: symbolic class name → binary internal name.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The symbolic class name
    /// * `binary_name` - The binary internal name in the current build
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] as [`MappingDatabase::insert`] does.
    pub fn insert_class(
        &self,
        symbol: impl Into<SymbolicName>,
        binary_name: impl Into<String>,
    ) -> Result<bool> {
        self.insert(symbol, BinarySignature::class(binary_name))
    }

    /// Inserts a member fact: symbolic member line → binary owner/name/descriptor.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The symbolic member line (`"ns/Class member descriptor"`)
    /// * `owner` - Binary internal name of the owning class
    /// * `name` - Binary member name
    /// * `descriptor` - Member descriptor
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] as [`MappingDatabase::insert`] does.
    pub fn insert_member(
        &self,
        symbol: impl Into<SymbolicName>,
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Result<bool> {
        self.insert(symbol, BinarySignature::member(owner, name, descriptor))
    }

    /// Returns the signature resolved for the symbolic name, if any.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The symbolic name to look up
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<BinarySignature> {
        self.facts.get(symbol).map(|entry| entry.value().clone())
    }

    /// Returns the binary class name resolved for a symbolic class name.
    ///
    /// `None` if the key is absent *or* resolves to a member.
    #[must_use]
    pub fn get_class(&self, symbol: &str) -> Option<String> {
        match self.get(symbol)? {
            BinarySignature::Class(name) => Some(name),
            BinarySignature::Member(_) => None,
        }
    }

    /// Returns the binary member reference resolved for a symbolic member name.
    ///
    /// `None` if the key is absent *or* resolves to a class.
    #[must_use]
    pub fn get_member(&self, symbol: &str) -> Option<MemberRef> {
        match self.get(symbol)? {
            BinarySignature::Class(_) => None,
            BinarySignature::Member(member) => Some(member),
        }
    }

    /// Returns true if the symbolic name is resolved.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The symbolic name to test
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.facts.contains_key(symbol)
    }

    /// Resolves a symbolic class name to its loaded class model.
    ///
    /// Composes [`MappingDatabase::get_class`] with the class cache; `None` if
    /// the symbol is unresolved, resolves to a member, or the class is absent
    /// from the archive.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The symbolic class name
    /// * `cache` - The class cache of the current run
    #[must_use]
    pub fn resolve_class(&self, symbol: &str, cache: &ClassCache) -> Option<ClassRc> {
        cache.get(&self.get_class(symbol)?)
    }

    /// Returns the number of resolved facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Returns true if no fact has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Returns all resolved symbolic names, in key order.
    #[must_use]
    pub fn keys(&self) -> Vec<SymbolicName> {
        self.facts.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Returns a snapshot of all facts, in key order.
    #[must_use]
    pub fn facts(&self) -> Vec<Fact> {
        self.facts
            .iter()
            .map(|entry| Fact {
                symbol: entry.key().clone(),
                signature: entry.value().clone(),
            })
            .collect()
    }
}
