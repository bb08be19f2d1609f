//! Class loading seam and the process-wide class cache.
//!
//! The engine never reads archives or parses class-file bytes itself; that work sits
//! behind the [`ClassProvider`] trait. The [`ClassCache`] wraps a provider so that each
//! binary name is loaded at most once per run and every rule sees the same
//! pointer-identical [`ClassRc`] for it.
//!
//! # Key Components
//!
//! - [`ClassProvider`] - External loader contract (`Ok(None)` means absent, not failed)
//! - [`ClassCache`] - `DashMap`-backed load-once cache over a provider
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use jarscope::metadata::{ClassCache, ClassModel, ClassProvider};
//! use jarscope::Result;
//!
//! struct EmptyArchive;
//!
//! impl ClassProvider for EmptyArchive {
//!     fn load(&self, _binary_name: &str) -> Result<Option<ClassModel>> {
//!         Ok(None)
//!     }
//! }
//!
//! let cache = ClassCache::new(Arc::new(EmptyArchive));
//! assert!(cache.get("a/bq").is_none());
//! ```

use std::sync::Arc;

use dashmap::DashMap;

use crate::{
    diagnostics::{DiagnosticCategory, Diagnostics},
    metadata::class::{ClassModel, ClassRc},
    Error, Result,
};

/// Contract for the external component that loads classes from the program archive.
///
/// Implementations parse class-file bytes into [`ClassModel`]s. Absence of a name is
/// the *expected* outcome for speculative lookups and must be reported as `Ok(None)`;
/// `Err` is reserved for I/O-level failures (unreadable archive, truncated entry).
pub trait ClassProvider: Send + Sync {
    /// Loads the class with the given binary internal name.
    ///
    /// # Arguments
    ///
    /// * `binary_name` - Internal name as it appears in the current build (e.g. `a/bq`)
    ///
    /// # Returns
    ///
    /// `Ok(Some(model))` if the class exists, `Ok(None)` if the name is absent
    /// from the archive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] (or another error) only for failures reading
    /// or decoding the archive itself.
    fn load(&self, binary_name: &str) -> Result<Option<ClassModel>>;
}

/// Process-wide, load-once cache of class models keyed by binary name.
///
/// Both hits and misses are cached: a name the provider reported absent stays
/// absent for the rest of the run, and a loaded class is structurally identical
/// (the same `Arc`) across all rules. Provider errors are converted to misses
/// and recorded to the attached diagnostics sink, so callers uniformly see
/// "rule cannot proceed" instead of a hard failure.
pub struct ClassCache {
    /// The external archive loader.
    provider: Arc<dyn ClassProvider>,
    /// Cached load results; `None` records a confirmed miss.
    cache: DashMap<String, Option<ClassRc>>,
    /// Sink for provider failure reports.
    diagnostics: Option<Arc<Diagnostics>>,
}

impl ClassCache {
    /// Creates a cache over the given provider.
    ///
    /// # Arguments
    ///
    /// * `provider` - The external archive loader
    #[must_use]
    pub fn new(provider: Arc<dyn ClassProvider>) -> Self {
        Self {
            provider,
            cache: DashMap::new(),
            diagnostics: None,
        }
    }

    /// Creates a cache that reports provider failures to a diagnostics sink.
    ///
    /// # Arguments
    ///
    /// * `provider` - The external archive loader
    /// * `diagnostics` - Sink that receives a `Class`-category error per failed load
    #[must_use]
    pub fn with_diagnostics(provider: Arc<dyn ClassProvider>, diagnostics: Arc<Diagnostics>) -> Self {
        Self {
            provider,
            cache: DashMap::new(),
            diagnostics: Some(diagnostics),
        }
    }

    /// Returns the class with the given binary name, loading it on first use.
    ///
    /// Repeated calls for the same name are O(1) and return clones of the same
    /// `Arc`. Absent names and provider failures both yield `None`; failures are
    /// additionally recorded to the diagnostics sink.
    ///
    /// # Arguments
    ///
    /// * `binary_name` - Internal name to look up
    #[must_use]
    pub fn get(&self, binary_name: &str) -> Option<ClassRc> {
        if let Some(cached) = self.cache.get(binary_name) {
            return cached.clone();
        }

        let loaded = match self.provider.load(binary_name) {
            Ok(model) => model.map(Arc::new),
            Err(error) => {
                if let Some(diagnostics) = &self.diagnostics {
                    diagnostics.error(
                        DiagnosticCategory::Class,
                        format!("failed to load '{binary_name}': {error}"),
                    );
                }
                None
            }
        };

        self.cache
            .entry(binary_name.to_string())
            .or_insert(loaded)
            .clone()
    }

    /// Returns the class with the given binary name, or [`Error::ClassNotFound`].
    ///
    /// Use this at call sites where absence indicates a broken precondition
    /// rather than missing evidence.
    ///
    /// # Arguments
    ///
    /// * `binary_name` - Internal name to look up
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClassNotFound`] if the name is absent from the archive.
    pub fn require(&self, binary_name: &str) -> Result<ClassRc> {
        self.get(binary_name)
            .ok_or_else(|| Error::ClassNotFound(binary_name.to_string()))
    }

    /// Returns true if the name has been looked up and found present.
    #[must_use]
    pub fn contains_loaded(&self, binary_name: &str) -> bool {
        self.cache
            .get(binary_name)
            .is_some_and(|entry| entry.is_some())
    }

    /// Returns the number of cached lookups (hits and misses).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if nothing has been looked up yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the binary names of all successfully loaded classes.
    #[must_use]
    pub fn loaded_names(&self) -> Vec<String> {
        self.cache
            .iter()
            .filter(|entry| entry.value().is_some())
            .map(|entry| entry.key().clone())
            .collect()
    }
}
