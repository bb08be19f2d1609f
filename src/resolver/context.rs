//! The shared context handed to every rule invocation.
//!
//! A [`ResolutionContext`] bundles the three collaborators a rule body needs (the class
//! cache, the mapping database, and the diagnostics sink) behind shared references, so
//! there is no ambient global state anywhere in the engine. The context also carries the
//! by-name convenience forms of the pool-search primitives, which compose a class load
//! with the underlying matcher call.

use crate::{
    diagnostics::Diagnostics,
    mapping::MappingDatabase,
    matcher,
    metadata::{ClassCache, ClassRc, MemberRef},
};

/// Shared, read-mostly context of one resolution run.
///
/// Every rule receives the same context by reference; the only mutation path
/// is fact insertion through [`ResolutionContext::mappings`].
///
/// # Example
///
/// ```rust,ignore
/// let rule = RuleDescriptor::builder("options_class")
///     .provides_class("ns/Options")
///     .build(|ctx| {
///         for name in ctx.classes.loaded_names() {
///             if ctx.search_pool_for_strings(&name, &["Options", "Controls"]) {
///                 ctx.mappings.insert_class("ns/Options", name)?;
///                 return Ok(true);
///             }
///         }
///         Ok(false)
///     });
/// ```
pub struct ResolutionContext<'run> {
    /// The process-wide class cache of this run.
    pub classes: &'run ClassCache,
    /// The fact store rules read dependencies from and write results to.
    pub mappings: &'run MappingDatabase,
    /// Sink for rule-level notes; the scheduler records outcomes here too.
    pub diagnostics: &'run Diagnostics,
}

impl<'run> ResolutionContext<'run> {
    /// Creates a context over the run's collaborators.
    ///
    /// # Arguments
    ///
    /// * `classes` - The class cache
    /// * `mappings` - The mapping database
    /// * `diagnostics` - The diagnostics sink
    #[must_use]
    pub fn new(
        classes: &'run ClassCache,
        mappings: &'run MappingDatabase,
        diagnostics: &'run Diagnostics,
    ) -> Self {
        Self {
            classes,
            mappings,
            diagnostics,
        }
    }

    /// Loads a class by its binary internal name.
    ///
    /// `None` means the name is absent from the archive; the caller's rule
    /// cannot proceed, which is a normal outcome.
    #[must_use]
    pub fn load_class(&self, binary_name: &str) -> Option<ClassRc> {
        self.classes.get(binary_name)
    }

    /// Resolves a symbolic class name to its loaded class model.
    ///
    /// Composes the mapping lookup with the class cache; `None` if the symbol
    /// is unresolved or the resolved class is absent.
    #[must_use]
    pub fn resolve_class(&self, symbol: &str) -> Option<ClassRc> {
        self.mappings.resolve_class(symbol, self.classes)
    }

    /// Returns true iff the named class exists and its constant pool contains
    /// every given string literal.
    ///
    /// # Arguments
    ///
    /// * `binary_name` - Binary internal name of the class to fingerprint
    /// * `literals` - String literals that must all be present
    #[must_use]
    pub fn search_pool_for_strings(&self, binary_name: &str, literals: &[&str]) -> bool {
        self.load_class(binary_name)
            .is_some_and(|class| matcher::search_pool_for_strings(&class, literals))
    }

    /// Returns true iff the named class exists and references every given
    /// field signature.
    ///
    /// # Arguments
    ///
    /// * `binary_name` - Binary internal name of the class to fingerprint
    /// * `fields` - Field references that must all be present
    #[must_use]
    pub fn search_pool_for_fields(&self, binary_name: &str, fields: &[MemberRef]) -> bool {
        self.load_class(binary_name)
            .is_some_and(|class| matcher::search_pool_for_fields(&class, fields))
    }
}
