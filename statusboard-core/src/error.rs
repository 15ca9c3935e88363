//! Error types for statusboard-core.

use thiserror::Error;

/// All errors that can arise from template pattern substitution.
///
/// These are programmer errors in pattern literals, surfaced as values so
/// callers can propagate them instead of panicking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HtmlError {
    /// A `{` was opened but never closed before the pattern ended.
    #[error("unclosed placeholder in template pattern")]
    UnclosedPlaceholder,

    /// The pattern names a placeholder that no argument supplies.
    #[error("unknown placeholder '{name}' in template pattern")]
    UnknownPlaceholder { name: String },

    /// A `}` appeared outside any placeholder (write `}}` for a literal).
    #[error("stray '}}' in template pattern")]
    StrayBrace,
}
