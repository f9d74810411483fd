//! # Store Errors
//!
//! Error taxonomy surfaced by record store operations.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
///
/// Every failure is a value the caller can branch on; the store has no
/// fatal conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Referenced id is not a key in the mapping
    #[error("record {0} not found")]
    NotFound(u64),

    /// Write payload rejected before mutation
    #[error("validation failed: {0}")]
    Validation(String),

    /// Caller's signal was cancelled at entry
    #[error("operation cancelled")]
    Cancelled,

    /// Caller's deadline had passed at entry
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl StoreError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Cancelled => "CANCELLED",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
        }
    }

    /// True for failures caused by the caller's cancellation signal
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StoreError::NotFound(1).code(), "NOT_FOUND");
        assert_eq!(StoreError::validation("x").code(), "VALIDATION_ERROR");
        assert_eq!(StoreError::Cancelled.code(), "CANCELLED");
        assert_eq!(StoreError::DeadlineExceeded.code(), "DEADLINE_EXCEEDED");
    }

    #[test]
    fn test_timeout_grouping() {
        assert!(StoreError::Cancelled.is_timeout());
        assert!(StoreError::DeadlineExceeded.is_timeout());
        assert!(!StoreError::NotFound(7).is_timeout());
        assert!(!StoreError::validation("title required").is_timeout());
    }

    #[test]
    fn test_display() {
        assert_eq!(StoreError::NotFound(42).to_string(), "record 42 not found");
        assert_eq!(
            StoreError::validation("title required").to_string(),
            "validation failed: title required"
        );
    }
}
