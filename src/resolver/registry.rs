//! The immutable rule registry.
//!
//! Rules are registered once at startup from their static declarations and never change
//! afterwards. Registration order is significant: it is the deterministic order the
//! scheduler visits ready rules in within a round.

use std::sync::Arc;

use crate::{
    diagnostics::{DiagnosticCategory, Diagnostics},
    resolver::rule::RuleDescriptor,
};

/// Immutable, ordered collection of all registered detection rules.
///
/// # Example
///
/// ```rust
/// use jarscope::resolver::{RuleDescriptor, RuleRegistry};
///
/// let registry = RuleRegistry::builder()
///     .register(
///         RuleDescriptor::builder("screen_class")
///             .provides_class("ns/Screen")
///             .build(|_ctx| Ok(false)),
///     )
///     .build();
///
/// assert_eq!(registry.len(), 1);
/// assert!(registry.get("screen_class").is_some());
/// ```
pub struct RuleRegistry {
    rules: Vec<Arc<RuleDescriptor>>,
}

impl RuleRegistry {
    /// Starts building a registry.
    #[must_use]
    pub fn builder() -> RuleRegistryBuilder {
        RuleRegistryBuilder {
            rules: Vec::new(),
            diagnostics: None,
        }
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up a rule by its identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The rule identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<RuleDescriptor>> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    /// Returns true if a rule with the given identifier is registered.
    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over the rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RuleDescriptor>> {
        self.rules.iter()
    }
}

/// Builder for [`RuleRegistry`].
///
/// Duplicate identifiers keep the first registration; the duplicate is dropped
/// and, when a diagnostics sink is attached, reported as a warning.
pub struct RuleRegistryBuilder {
    rules: Vec<Arc<RuleDescriptor>>,
    diagnostics: Option<Arc<Diagnostics>>,
}

impl RuleRegistryBuilder {
    /// Attaches a diagnostics sink that receives duplicate-registration warnings.
    ///
    /// # Arguments
    ///
    /// * `diagnostics` - The sink to report to
    #[must_use]
    pub fn diagnostics(mut self, diagnostics: Arc<Diagnostics>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Registers a rule.
    ///
    /// # Arguments
    ///
    /// * `rule` - The descriptor to add; ignored if its id is already taken
    #[must_use]
    pub fn register(mut self, rule: RuleDescriptor) -> Self {
        if self.rules.iter().any(|existing| existing.id() == rule.id()) {
            if let Some(diagnostics) = &self.diagnostics {
                diagnostics.warning(
                    DiagnosticCategory::Rule,
                    format!("duplicate rule id '{}' ignored", rule.id()),
                );
            }
            return self;
        }

        self.rules.push(Arc::new(rule));
        self
    }

    /// Finishes the registry.
    #[must_use]
    pub fn build(self) -> RuleRegistry {
        RuleRegistry { rules: self.rules }
    }
}
