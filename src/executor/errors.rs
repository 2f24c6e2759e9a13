//! Query error types
//!
//! Error codes:
//! - SALES_NOT_LOADED: query issued before any upload
//! - SALES_INVALID_PARAMETER: a query parameter failed to parse

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors a query can fail with. Both are caller errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No dataset has been uploaded yet
    #[error("No CSV data in memory. Please upload first.")]
    NotLoaded,

    /// A parameter was present but malformed
    #[error("Invalid parameter '{field}': '{value}' {reason}")]
    InvalidParameter {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl QueryError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(field: &'static str, value: &str, reason: &'static str) -> Self {
        QueryError::InvalidParameter {
            field,
            value: value.to_string(),
            reason,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::NotLoaded => "SALES_NOT_LOADED",
            QueryError::InvalidParameter { .. } => "SALES_INVALID_PARAMETER",
        }
    }

    /// Returns the offending field, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            QueryError::InvalidParameter { field, .. } => Some(*field),
            QueryError::NotLoaded => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(QueryError::NotLoaded.code(), "SALES_NOT_LOADED");
        assert_eq!(
            QueryError::invalid_parameter("page", "x", "is not an integer").code(),
            "SALES_INVALID_PARAMETER"
        );
    }

    #[test]
    fn test_invalid_parameter_names_field() {
        let err = QueryError::invalid_parameter("start_date", "2024-99-99", "is not a valid date");
        assert_eq!(err.field(), Some("start_date"));
        assert!(err.to_string().contains("start_date"));
        assert!(err.to_string().contains("2024-99-99"));
    }

    #[test]
    fn test_not_loaded_message() {
        assert_eq!(
            QueryError::NotLoaded.to_string(),
            "No CSV data in memory. Please upload first."
        );
    }
}
