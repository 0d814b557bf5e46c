//! Error types for sqlsearch

use thiserror::Error;

/// Result type alias for sqlsearch operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors raised by the opt-in strict helpers.
///
/// Rendering a clause never fails; these only come from parsing names and from
/// [`SearchClause::validate`](crate::SearchClause::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Algorithm name is not one of OR, AND, NAND, NOR
    #[error("Unknown search algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Pattern name or template is not one of the seven known templates
    #[error("Unknown search pattern: {0}")]
    UnknownPattern(String),

    /// Keyword is not LIKE / NOT LIKE / AND / OR
    #[error("Unknown keyword: {0}")]
    UnknownKeyword(String),

    /// Neither columns nor a tag column are configured
    #[error("No search target: configure at least one column or a tag column")]
    NoSearchTarget,
}

impl SearchError {
    /// Create an unknown algorithm error
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(name.into())
    }

    /// Create an unknown pattern error
    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern(name.into())
    }

    /// Create an unknown keyword error
    pub fn unknown_keyword(name: impl Into<String>) -> Self {
        Self::UnknownKeyword(name.into())
    }

    /// Check if this is a configuration error (as opposed to a parse error)
    pub fn is_config(&self) -> bool {
        matches!(self, Self::NoSearchTarget)
    }
}
