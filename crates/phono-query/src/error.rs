//! Error types for the query model.

use thiserror::Error;

/// Errors that can occur while building a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Operator symbol outside the recognised set (`=`, `<`, `<=`, `>`, `>=`).
    ///
    /// This is a configuration error that affects every language
    /// identically, so callers must abort the whole run rather than
    /// fall back to a default operator.
    #[error("comparison operator not recognised: {0}")]
    UnknownOperator(String),
}

/// Result type for query-model operations.
pub type ParseResult<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_operator() {
        let err = QueryError::UnknownOperator("!=".to_string());
        assert_eq!(err.to_string(), "comparison operator not recognised: !=");
    }
}
