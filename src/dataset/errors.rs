//! Dataset error types
//!
//! Error codes:
//! - SALES_SCHEMA_ERROR: uploaded data rejected, nothing was loaded
//! - SALES_NOT_LOADED: no dataset has been loaded yet

use thiserror::Error;

/// Result type for dataset operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while decoding, validating or reading the dataset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Nothing has been uploaded yet
    #[error("No CSV data in memory. Please upload first.")]
    NotLoaded,

    /// The input could not be decoded as a table at all
    #[error("{0}")]
    Decode(String),

    /// A required column is absent from the header
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// A row lacks a value for a required column
    #[error("Row {row}: missing value for '{column}'")]
    MissingField { row: usize, column: String },

    /// A cell could not be converted to its column type
    #[error("Row {row}: invalid {column} '{value}': {reason}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },
}

impl StoreError {
    /// Create a decode error
    pub fn decode(reason: impl Into<String>) -> Self {
        StoreError::Decode(reason.into())
    }

    /// Create an invalid value error for a 1-based data row
    pub fn invalid_value(
        row: usize,
        column: &str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        StoreError::InvalidValue {
            row,
            column: column.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotLoaded => "SALES_NOT_LOADED",
            _ => "SALES_SCHEMA_ERROR",
        }
    }

    /// Returns true when the upload itself was rejected
    pub fn is_schema_error(&self) -> bool {
        !matches!(self, StoreError::NotLoaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(StoreError::NotLoaded.code(), "SALES_NOT_LOADED");
        assert_eq!(
            StoreError::MissingColumn("date".into()).code(),
            "SALES_SCHEMA_ERROR"
        );
        assert!(StoreError::decode("bad").is_schema_error());
        assert!(!StoreError::NotLoaded.is_schema_error());
    }

    #[test]
    fn test_invalid_value_display() {
        let err = StoreError::invalid_value(3, "date", "2024-13-01", "not a calendar date");
        let display = err.to_string();
        assert!(display.contains("Row 3"));
        assert!(display.contains("date"));
        assert!(display.contains("2024-13-01"));
    }
}
