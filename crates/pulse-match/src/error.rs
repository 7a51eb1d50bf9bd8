//! Matcher error types.

use thiserror::Error;

/// Errors from the mapping library's learning operations.
///
/// Matching itself never fails: a library read error degrades to the
/// taxonomy and fuzzy stages and is noted in the result's source.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The title is empty after normalization.
    #[error("title {0:?} is empty after normalization")]
    EmptyTitle(String),

    /// The standardized title or role family of a mapping is blank.
    #[error("mapping for {title:?} is missing its {field}")]
    IncompleteMapping { title: String, field: &'static str },

    /// The backing mapping store failed.
    #[error("mapping store error: {0}")]
    Store(String),
}
