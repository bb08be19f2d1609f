//! Rule descriptors: declared facts plus the detection callable.
//!
//! A detection rule is client code; the engine only needs its declaration surface
//! (which symbolic facts it may *provide*, which already-resolved facts it *depends*
//! on) and a callable to invoke once the dependencies are satisfied. Descriptors are built
//! once at registration time and immutable afterwards; dispatch is a stored closure,
//! not runtime introspection.

use std::fmt;
use std::sync::Arc;

use crate::{
    mapping::{MappingDatabase, SymbolicName},
    resolver::context::ResolutionContext,
    Result,
};

/// The callable of a detection rule.
///
/// Returns `Ok(true)` when the rule ran its matching logic (it may have resolved
/// any number of its declared facts; partial success is normal), `Ok(false)` when
/// its in-body preconditions were not met, and `Err` only for hard failures such
/// as a mapping conflict. Side effects go exclusively through the
/// [`MappingDatabase`] on the context.
pub type RuleFn = Arc<dyn Fn(&ResolutionContext<'_>) -> Result<bool> + Send + Sync>;

/// Immutable descriptor of one detection rule.
///
/// The six declaration sets mirror the rule declaration surface: classes, fields
/// and methods are declared independently on both the provides and depends side,
/// each entry in the symbolic line format.
///
/// # Example
///
/// ```rust
/// use jarscope::resolver::RuleDescriptor;
///
/// let rule = RuleDescriptor::builder("window_class")
///     .provides_class("ns/Window")
///     .provides_method("ns/Window getTitle ()Ljava/lang/String;")
///     .depends_class("ns/Screen")
///     .build(|_ctx| {
///         // candidate matching goes here
///         Ok(false)
///     });
///
/// assert_eq!(rule.id(), "window_class");
/// assert_eq!(rule.provides().count(), 2);
/// assert_eq!(rule.depends().count(), 1);
/// ```
#[derive(Clone)]
pub struct RuleDescriptor {
    id: String,
    provides_classes: Vec<SymbolicName>,
    provides_fields: Vec<SymbolicName>,
    provides_methods: Vec<SymbolicName>,
    depends_classes: Vec<SymbolicName>,
    depends_fields: Vec<SymbolicName>,
    depends_methods: Vec<SymbolicName>,
    run: RuleFn,
}

impl RuleDescriptor {
    /// Starts building a descriptor with the given unique identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique rule identifier used in reports and diagnostics
    #[must_use]
    pub fn builder(id: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            id: id.into(),
            provides_classes: Vec::new(),
            provides_fields: Vec::new(),
            provides_methods: Vec::new(),
            depends_classes: Vec::new(),
            depends_fields: Vec::new(),
            depends_methods: Vec::new(),
        }
    }

    /// Returns the unique identifier of the rule.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the symbolic class names this rule may establish.
    #[must_use]
    pub fn provides_classes(&self) -> &[SymbolicName] {
        &self.provides_classes
    }

    /// Returns the symbolic field names this rule may establish.
    #[must_use]
    pub fn provides_fields(&self) -> &[SymbolicName] {
        &self.provides_fields
    }

    /// Returns the symbolic method names this rule may establish.
    #[must_use]
    pub fn provides_methods(&self) -> &[SymbolicName] {
        &self.provides_methods
    }

    /// Iterates over every declared provided fact (classes, fields, methods).
    pub fn provides(&self) -> impl Iterator<Item = &SymbolicName> {
        self.provides_classes
            .iter()
            .chain(&self.provides_fields)
            .chain(&self.provides_methods)
    }

    /// Iterates over every declared dependency (classes, fields, methods).
    pub fn depends(&self) -> impl Iterator<Item = &SymbolicName> {
        self.depends_classes
            .iter()
            .chain(&self.depends_fields)
            .chain(&self.depends_methods)
    }

    /// Returns true if every declared dependency is resolved in the database.
    ///
    /// # Arguments
    ///
    /// * `mappings` - The fact store to test against
    #[must_use]
    pub fn depends_satisfied(&self, mappings: &MappingDatabase) -> bool {
        self.depends().all(|symbol| mappings.contains(symbol.as_str()))
    }

    /// Returns true if every declared provided fact is resolved in the database.
    ///
    /// # Arguments
    ///
    /// * `mappings` - The fact store to test against
    #[must_use]
    pub fn provides_complete(&self, mappings: &MappingDatabase) -> bool {
        self.provides().all(|symbol| mappings.contains(symbol.as_str()))
    }

    /// Invokes the rule's callable.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The shared resolution context
    ///
    /// # Errors
    ///
    /// Propagates whatever the rule body returns; the scheduler converts
    /// errors into diagnostics rather than aborting the run.
    pub fn run(&self, ctx: &ResolutionContext<'_>) -> Result<bool> {
        (self.run)(ctx)
    }
}

impl fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("id", &self.id)
            .field("provides", &self.provides().count())
            .field("depends", &self.depends().count())
            .finish()
    }
}

/// Builder for [`RuleDescriptor`].
///
/// Declarations chain; the callable is supplied last to [`RuleBuilder::build`].
pub struct RuleBuilder {
    id: String,
    provides_classes: Vec<SymbolicName>,
    provides_fields: Vec<SymbolicName>,
    provides_methods: Vec<SymbolicName>,
    depends_classes: Vec<SymbolicName>,
    depends_fields: Vec<SymbolicName>,
    depends_methods: Vec<SymbolicName>,
}

impl RuleBuilder {
    /// Declares a symbolic class name this rule may establish.
    #[must_use]
    pub fn provides_class(mut self, symbol: impl Into<SymbolicName>) -> Self {
        self.provides_classes.push(symbol.into());
        self
    }

    /// Declares a symbolic field name this rule may establish.
    #[must_use]
    pub fn provides_field(mut self, symbol: impl Into<SymbolicName>) -> Self {
        self.provides_fields.push(symbol.into());
        self
    }

    /// Declares a symbolic method name this rule may establish.
    #[must_use]
    pub fn provides_method(mut self, symbol: impl Into<SymbolicName>) -> Self {
        self.provides_methods.push(symbol.into());
        self
    }

    /// Declares a symbolic class name that must be resolved before this rule runs.
    #[must_use]
    pub fn depends_class(mut self, symbol: impl Into<SymbolicName>) -> Self {
        self.depends_classes.push(symbol.into());
        self
    }

    /// Declares a symbolic field name that must be resolved before this rule runs.
    #[must_use]
    pub fn depends_field(mut self, symbol: impl Into<SymbolicName>) -> Self {
        self.depends_fields.push(symbol.into());
        self
    }

    /// Declares a symbolic method name that must be resolved before this rule runs.
    #[must_use]
    pub fn depends_method(mut self, symbol: impl Into<SymbolicName>) -> Self {
        self.depends_methods.push(symbol.into());
        self
    }

    /// Finishes the descriptor with the rule's callable.
    ///
    /// # Arguments
    ///
    /// * `run` - The detection callable; see [`RuleFn`] for the protocol
    #[must_use]
    pub fn build(
        self,
        run: impl Fn(&ResolutionContext<'_>) -> Result<bool> + Send + Sync + 'static,
    ) -> RuleDescriptor {
        RuleDescriptor {
            id: self.id,
            provides_classes: self.provides_classes,
            provides_fields: self.provides_fields,
            provides_methods: self.provides_methods,
            depends_classes: self.depends_classes,
            depends_fields: self.depends_fields,
            depends_methods: self.depends_methods,
            run: Arc::new(run),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingDatabase;

    fn sample_rule() -> RuleDescriptor {
        RuleDescriptor::builder("window")
            .provides_class("ns/Window")
            .provides_field("ns/Window title Ljava/lang/String;")
            .depends_class("ns/Screen")
            .depends_method("ns/Screen init ()V")
            .build(|_ctx| Ok(true))
    }

    #[test]
    fn test_declaration_sets() {
        let rule = sample_rule();
        assert_eq!(rule.id(), "window");
        assert_eq!(rule.provides().count(), 2);
        assert_eq!(rule.depends().count(), 2);
        assert_eq!(rule.provides_classes().len(), 1);
        assert_eq!(rule.provides_fields().len(), 1);
        assert!(rule.provides_methods().is_empty());
    }

    #[test]
    fn test_depends_satisfied() {
        let rule = sample_rule();
        let db = MappingDatabase::new();
        assert!(!rule.depends_satisfied(&db));

        db.insert_class("ns/Screen", "a").unwrap();
        assert!(!rule.depends_satisfied(&db));

        db.insert_member("ns/Screen init ()V", "a", "b", "()V").unwrap();
        assert!(rule.depends_satisfied(&db));
    }

    #[test]
    fn test_provides_complete() {
        let rule = sample_rule();
        let db = MappingDatabase::new();
        assert!(!rule.provides_complete(&db));

        db.insert_class("ns/Window", "c").unwrap();
        assert!(!rule.provides_complete(&db));

        db.insert_member(
            "ns/Window title Ljava/lang/String;",
            "c",
            "d",
            "Ljava/lang/String;",
        )
        .unwrap();
        assert!(rule.provides_complete(&db));
    }
}
