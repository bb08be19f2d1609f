use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers the failure modes that can occur while resolving symbolic mappings for an
/// obfuscated program archive. Matching primitives themselves are total and signal "no match"
/// through their return values; `Error` only appears at the edges where a failure is either a
/// broken heuristic (a [`Error::Conflict`]), malformed textual input (descriptors and mapping
/// lines), or an external loader problem.
///
/// # Error Categories
///
/// ## Resolution Errors
/// - [`Error::Conflict`] - A symbolic name was resolved to two different binary signatures
///
/// ## Parsing Errors
/// - [`Error::MalformedDescriptor`] - A field/method descriptor violates the JVM grammar
/// - [`Error::MalformedSymbol`] - A mapping line does not follow the whitespace-separated format
///
/// ## External Errors
/// - [`Error::ClassNotFound`] - A binary class name is absent from the program archive
/// - [`Error::Provider`] - The external class provider failed (I/O-level, not absence)
///
/// # Examples
///
/// ```rust
/// use jarscope::{mapping::MappingDatabase, Error};
///
/// let db = MappingDatabase::new();
/// db.insert_class("ns/Window", "a").unwrap();
///
/// match db.insert_class("ns/Window", "b") {
///     Err(Error::Conflict { symbol, existing, attempted }) => {
///         eprintln!("{symbol} already maps to {existing}, rejected {attempted}");
///     }
///     _ => unreachable!("second writer with a different value must conflict"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A symbolic name was written twice with disagreeing binary signatures.
    ///
    /// Facts are first-writer-wins and immutable once present. A second write with a
    /// *different* value indicates a broken assumption in one of the detection rules,
    /// not merely missing evidence, and is therefore surfaced distinctly instead of
    /// being silently dropped.
    ///
    /// # Fields
    ///
    /// * `symbol` - The symbolic name that was written twice
    /// * `existing` - The binary signature already recorded for it
    /// * `attempted` - The disagreeing signature the second writer supplied
    #[error("Conflicting resolution for '{symbol}': kept '{existing}', rejected '{attempted}'")]
    Conflict {
        /// The symbolic name that was written twice.
        symbol: String,
        /// The binary signature already present in the database.
        existing: String,
        /// The disagreeing binary signature that was rejected.
        attempted: String,
    },

    /// A binary class name does not exist in the current program archive.
    ///
    /// Loaders surface this when a caller insists on a class being present. Inside rule
    /// bodies absence is the expected, non-fatal case and is reported as `None` instead.
    #[error("Class '{0}' does not exist in the program archive")]
    ClassNotFound(String),

    /// A field or method descriptor could not be parsed.
    ///
    /// Descriptors follow the standard JVM grammar (e.g. `(Ljava/lang/String;I)V`).
    /// The error carries the offending input and the reason the parse stopped.
    #[error("Malformed descriptor '{descriptor}': {reason}")]
    MalformedDescriptor {
        /// The descriptor string that failed to parse.
        descriptor: String,
        /// Why parsing stopped.
        reason: String,
    },

    /// A symbolic or binary mapping line does not follow the line format.
    ///
    /// Member lines are `"owner name descriptor"` and class lines a bare internal
    /// name; consumers split on whitespace, so the token count must match exactly.
    #[error("Malformed mapping line '{0}'")]
    MalformedSymbol(String),

    /// The external class provider failed to produce a class.
    ///
    /// This covers I/O-level failures inside a [`crate::metadata::ClassProvider`]
    /// implementation (unreadable archive, truncated class file). Absence of a name
    /// is not a provider error; providers report that as `Ok(None)`.
    #[error("Class provider error - {0}")]
    Provider(String),
}
