//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

use crate::models::expense::MAX_AMOUNT;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Date text is not a valid `YYYY-MM-DD` date
    #[error("Invalid date format: '{0}'. Use YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// Amount text was rejected; the issue says why
    #[error("Invalid amount: '{0}'. {1}")]
    InvalidAmount(String, AmountIssue),

    /// Category is empty once surrounding whitespace is removed
    #[error("Category must not be empty")]
    EmptyCategory,

    /// Writing the expense file failed; the in-memory collection may already
    /// hold the new record
    #[error("Failed to persist expenses: {0}")]
    PersistenceFailed(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Why an amount was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountIssue {
    NotANumber,
    NotPositive,
    /// Non-zero digits below one cent
    TooPrecise,
    /// Above [`MAX_AMOUNT`]
    TooLarge,
}

impl fmt::Display for AmountIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountIssue::NotANumber => write!(f, "Amount must be a number"),
            AmountIssue::NotPositive => write!(f, "Amount must be greater than zero"),
            AmountIssue::TooPrecise => write!(f, "Amounts have at most two decimal places"),
            AmountIssue::TooLarge => write!(f, "Amount must not exceed {}", MAX_AMOUNT),
        }
    }
}

impl ExpenseError {
    /// Check if this is a validation error raised before any mutation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDateFormat(_) | Self::InvalidAmount(..) | Self::EmptyCategory
        )
    }

    /// Check if this is a persistence failure
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::PersistenceFailed(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Csv(err.to_string())
        }
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_errors() {
        let err = ExpenseError::InvalidDateFormat("2024-13-40".into());
        assert_eq!(
            err.to_string(),
            "Invalid date format: '2024-13-40'. Use YYYY-MM-DD"
        );
        assert!(err.is_validation());
        assert!(ExpenseError::InvalidAmount("-5".into(), AmountIssue::NotPositive).is_validation());
        assert!(ExpenseError::EmptyCategory.is_validation());
    }

    #[test]
    fn test_amount_issue_messages() {
        let err = ExpenseError::InvalidAmount("0.001".into(), AmountIssue::TooPrecise);
        assert_eq!(
            err.to_string(),
            "Invalid amount: '0.001'. Amounts have at most two decimal places"
        );

        let err = ExpenseError::InvalidAmount("-5".into(), AmountIssue::NotPositive);
        assert_eq!(err.to_string(), "Invalid amount: '-5'. Amount must be greater than zero");

        let err = ExpenseError::InvalidAmount("2e9".into(), AmountIssue::TooLarge);
        assert_eq!(
            err.to_string(),
            "Invalid amount: '2e9'. Amount must not exceed 1000000000.00"
        );
    }

    #[test]
    fn test_persistence_is_not_validation() {
        let err = ExpenseError::PersistenceFailed("disk full".into());
        assert!(err.is_persistence());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }

    #[test]
    fn test_from_csv_error() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&b"a,b\nc\n"[..]);
        let err = reader
            .records()
            .find_map(Result::err)
            .expect("uneven row should fail in strict mode");

        let err: ExpenseError = err.into();
        assert!(matches!(err, ExpenseError::Csv(_)));
    }
}
