//! Error types for query execution.

use thiserror::Error;

/// Errors that can occur during query execution.
///
/// Both variants are data-integrity defects in the backing tables and are
/// fatal to the whole run: no partial result set is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    /// A selected language identifier is not a decimal integer.
    #[error("language identifier is not numeric: {0}")]
    NonNumericLanguageId(String),

    /// The dataset listed a language identifier without an inventory.
    #[error("language not found in dataset: {0}")]
    LanguageNotFound(String),
}

/// Result type for executor operations.
pub type ExecutorResult<T> = std::result::Result<T, ExecutorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_non_numeric_language_id() {
        let err = ExecutorError::NonNumericLanguageId("abc".to_string());
        assert_eq!(err.to_string(), "language identifier is not numeric: abc");
    }

    #[test]
    fn test_error_display_language_not_found() {
        let err = ExecutorError::LanguageNotFound("42".to_string());
        assert_eq!(err.to_string(), "language not found in dataset: 42");
    }
}
