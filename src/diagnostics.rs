//! Diagnostics collection for mapping resolution runs.
//!
//! This module provides types for collecting and reporting diagnostic messages while the
//! scheduler drives detection rules over an obfuscated program archive. Resolution is a
//! lenient process by design: a rule that cannot find its target, an absent class, or an
//! ambiguous candidate set are all normal outcomes that should be reported but must never
//! abort the run.
//!
//! # Architecture
//!
//! The diagnostics system is shared across the resolution pipeline:
//! - **`MappingDatabase`**: Reports conflicting writes to an already-resolved symbol
//! - **`ClassCache`**: Reports provider failures while loading classes
//! - **`DependencyScheduler`**: Reports per-rule outcomes and the final unresolved summary
//!
//! The [`Diagnostics`] container uses `boxcar::Vec` for lock-free append operations, so
//! diagnostics can be collected from shared references without synchronization overhead.
//!
//! # Key Components
//!
//! - [`Diagnostics`] - Thread-safe container for diagnostic entries
//! - [`Diagnostic`] - Individual diagnostic entry with severity and context
//! - [`DiagnosticSeverity`] - Severity level (Info, Warning, Error)
//! - [`DiagnosticCategory`] - Category of the diagnostic source
//!
//! # Usage Examples
//!
//! ```rust
//! use jarscope::diagnostics::{Diagnostics, DiagnosticCategory};
//!
//! let diagnostics = Diagnostics::new();
//!
//! // Report an ambiguous candidate set
//! diagnostics.warning(
//!     DiagnosticCategory::Rule,
//!     "2 candidates matched 'getInstance ()Lns/Window;', no fact written",
//! );
//!
//! // Report a conflicting resolution
//! diagnostics.error(
//!     DiagnosticCategory::Mapping,
//!     "'ns/Window' already resolved to 'a', rejected 'b'",
//! );
//!
//! if diagnostics.has_errors() {
//!     for entry in diagnostics.iter() {
//!         eprintln!("{entry}");
//!     }
//! }
//! ```

use std::fmt;

/// Severity level of a diagnostic entry.
///
/// Determines how the diagnostic should be treated and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Informational message, not indicating a problem.
    ///
    /// Used for per-rule progress notes and resolved-fact records.
    Info,

    /// Warning about a rule that could not establish its facts.
    ///
    /// The run continues; the affected symbols simply stay unresolved.
    /// Absent classes and ambiguous candidate sets land here.
    Warning,

    /// Error indicating a broken heuristic or external failure.
    ///
    /// Conflicting resolutions and provider failures are errors. The run
    /// still continues unless the scheduler is configured otherwise.
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Info => write!(f, "INFO"),
            DiagnosticSeverity::Warning => write!(f, "WARN"),
            DiagnosticSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// Category indicating the source or type of diagnostic.
///
/// Helps classify diagnostics for filtering and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    /// Issues raised by or about a detection rule.
    ///
    /// Examples: rule returned false, rule body failed, ambiguous candidates.
    Rule,

    /// Issues with the mapping fact store.
    ///
    /// Examples: conflicting writes to an already-resolved symbol.
    Mapping,

    /// Issues with class loading or the class cache.
    ///
    /// Examples: provider failures, repeated misses for a referenced name.
    Class,

    /// Issues with descriptor parsing or assembly.
    ///
    /// Examples: malformed descriptor strings in rule declarations.
    Descriptor,

    /// Issues raised by the scheduler itself.
    ///
    /// Examples: round cap reached, empty resolution, unresolved summary.
    Scheduler,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Rule => write!(f, "Rule"),
            DiagnosticCategory::Mapping => write!(f, "Mapping"),
            DiagnosticCategory::Class => write!(f, "Class"),
            DiagnosticCategory::Descriptor => write!(f, "Descriptor"),
            DiagnosticCategory::Scheduler => write!(f, "Scheduler"),
        }
    }
}

/// A single diagnostic entry with context information.
///
/// Contains the severity, category, message, and optional rule/symbol context
/// for a diagnostic reported during a resolution run.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level of this diagnostic.
    pub severity: DiagnosticSeverity,

    /// Category indicating the source of this diagnostic.
    pub category: DiagnosticCategory,

    /// Human-readable description of the issue.
    pub message: String,

    /// Optional identifier of the rule that raised or caused the issue.
    pub rule: Option<String>,

    /// Optional symbolic name the issue relates to.
    pub symbol: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic entry.
    ///
    /// # Arguments
    ///
    /// * `severity` - Severity level of the diagnostic
    /// * `category` - Category of the diagnostic source
    /// * `message` - Human-readable description
    pub fn new(
        severity: DiagnosticSeverity,
        category: DiagnosticCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            rule: None,
            symbol: None,
        }
    }

    /// Adds the identifier of the originating rule to the diagnostic.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Adds the related symbolic name to the diagnostic.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.category, self.message)?;

        if let Some(rule) = &self.rule {
            write!(f, " (rule: {rule})")?;
        }

        if let Some(symbol) = &self.symbol {
            write!(f, " (symbol: {symbol})")?;
        }

        Ok(())
    }
}

/// Thread-safe container for collecting diagnostic entries.
///
/// Uses `boxcar::Vec` internally for lock-free append operations, so the
/// container can be appended to through shared references from the database,
/// the class cache, and every rule body without coordination.
///
/// # Example
///
/// ```rust
/// use jarscope::diagnostics::{Diagnostics, DiagnosticCategory};
///
/// let diagnostics = Diagnostics::new();
/// diagnostics.info(DiagnosticCategory::Scheduler, "round 1: 4 new facts");
/// diagnostics.warning(DiagnosticCategory::Class, "class 'zz' absent from archive");
///
/// assert_eq!(diagnostics.count(), 2);
/// assert!(!diagnostics.has_errors());
/// ```
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: boxcar::Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates a new empty diagnostics container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: boxcar::Vec::new(),
        }
    }

    /// Adds an informational diagnostic.
    ///
    /// # Arguments
    ///
    /// * `category` - Category of the diagnostic
    /// * `message` - Description of the observation
    pub fn info(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(DiagnosticSeverity::Info, category, message));
    }

    /// Adds a warning diagnostic.
    ///
    /// # Arguments
    ///
    /// * `category` - Category of the diagnostic
    /// * `message` - Description of the issue
    pub fn warning(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(
            DiagnosticSeverity::Warning,
            category,
            message,
        ));
    }

    /// Adds an error diagnostic.
    ///
    /// # Arguments
    ///
    /// * `category` - Category of the diagnostic
    /// * `message` - Description of the error
    pub fn error(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(
            DiagnosticSeverity::Error,
            category,
            message,
        ));
    }

    /// Adds a diagnostic entry directly.
    ///
    /// Use this for diagnostics that carry rule or symbol context.
    pub fn push(&self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Returns true if any diagnostics have been collected.
    pub fn has_any(&self) -> bool {
        self.entries.count() > 0
    }

    /// Returns true if any error-level diagnostics have been collected.
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Error)
    }

    /// Returns true if any warning-level diagnostics have been collected.
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Warning)
    }

    /// Returns the total number of diagnostics.
    pub fn count(&self) -> usize {
        self.entries.count()
    }

    /// Returns the number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == DiagnosticSeverity::Error)
            .count()
    }

    /// Returns the number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == DiagnosticSeverity::Warning)
            .count()
    }

    /// Returns an iterator over all collected diagnostics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().map(|(_, d)| d)
    }

    /// Returns all diagnostics of a given category.
    ///
    /// # Arguments
    ///
    /// * `category` - The category to filter by
    pub fn by_category(&self, category: DiagnosticCategory) -> Vec<&Diagnostic> {
        self.iter().filter(|d| d.category == category).collect()
    }
}
