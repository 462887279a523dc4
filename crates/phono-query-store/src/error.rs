//! Error types for dataset loading and query input.

use thiserror::Error;

/// Errors that can occur while loading the dataset or reading a query.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A cache file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the offending file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A cache file could not be decoded as the expected JSON table.
    #[error("failed to decode {path}: {source}")]
    Json {
        /// Path of the offending file.
        path: String,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The query input on stdin was malformed.
    #[error("malformed query input: {0}")]
    Input(String),

    /// The query itself was malformed (e.g. an unrecognised operator).
    #[error(transparent)]
    Query(#[from] phono_query::QueryError),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_input() {
        let err = StoreError::Input("expected a JSON array of feature tags".to_string());
        assert_eq!(
            err.to_string(),
            "malformed query input: expected a JSON array of feature tags"
        );
    }

    #[test]
    fn test_error_from_query_error() {
        let err: StoreError = phono_query::QueryError::UnknownOperator("!=".to_string()).into();
        assert_eq!(err.to_string(), "comparison operator not recognised: !=");
    }
}
