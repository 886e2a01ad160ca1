//! Domain Errors - Business rule violations
//!
//! One enum for every failure the business layer can raise. Storage
//! implementations report through the same type (`AlreadyExists`, `NotFound`,
//! `Storage`) so their failures pass through services untouched.

use crate::value_objects::PostStatus;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Domain-specific errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Period end is not strictly after its start
    #[error(
        "The end date must be later than the start date. StartDate: {}. EndDate: {}",
        .from.format("%d.%m.%Y %H:%M:%S"),
        .to.format("%d.%m.%Y %H:%M:%S")
    )]
    IncorrectDates {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },

    /// Required argument was not supplied
    #[error("Argument {0} is missing")]
    ArgumentMissing(String),

    /// Malformed identifier or violated entity invariant
    #[error("Validation failed for field {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Lookup, delete or cancel target does not exist
    #[error("Element not found by value = {0}")]
    NotFound(String),

    /// Storage returned no list at all (as opposed to an empty one)
    #[error("The storage returned no list")]
    EmptyResult,

    /// Raised by storage on a duplicate key
    #[error("There is already an element with value {value} of parameter {field}")]
    AlreadyExists { field: String, value: String },

    /// Any other storage failure
    #[error("Error while working in storage: {0}")]
    Storage(String),

    /// Post soft-delete state machine violation
    #[error("Transition from {from} to {to} is not allowed")]
    InvalidStateTransition { from: PostStatus, to: PostStatus },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Build a validation failure for `field`
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Field name carried by a validation failure
    pub fn field(&self) -> Option<&str> {
        match self {
            DomainError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Check if error is an input or invariant validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DomainError::IncorrectDates { .. }
                | DomainError::ArgumentMissing(_)
                | DomainError::Validation { .. }
        )
    }

    /// Check if error is a business rule violation
    pub fn is_business_rule_error(&self) -> bool {
        matches!(self, DomainError::InvalidStateTransition { .. })
    }

    /// Check if error indicates missing data
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, DomainError::NotFound(_) | DomainError::EmptyResult)
    }

    /// Check if error originated in storage
    pub fn is_storage_error(&self) -> bool {
        matches!(
            self,
            DomainError::AlreadyExists { .. } | DomainError::Storage(_)
        )
    }

    /// Get error category for business logic
    pub fn category(&self) -> ErrorCategory {
        if self.is_validation_error() {
            ErrorCategory::Validation
        } else if self.is_business_rule_error() {
            ErrorCategory::BusinessRule
        } else if self.is_not_found_error() {
            ErrorCategory::NotFound
        } else {
            ErrorCategory::Storage
        }
    }
}

/// Categories of domain errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input validation errors
    Validation,
    /// Business rule violations
    BusinessRule,
    /// Resource not found
    NotFound,
    /// Failures surfaced from storage
    Storage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_error_categorization() {
        let validation_error = DomainError::validation("Id", "Field Id is empty");
        assert!(validation_error.is_validation_error());
        assert_eq!(validation_error.category(), ErrorCategory::Validation);

        let business_rule_error = DomainError::InvalidStateTransition {
            from: PostStatus::Deleted,
            to: PostStatus::Deleted,
        };
        assert_eq!(business_rule_error.category(), ErrorCategory::BusinessRule);

        let not_found_error = DomainError::NotFound("test-id".to_string());
        assert!(not_found_error.is_not_found_error());
        assert_eq!(not_found_error.category(), ErrorCategory::NotFound);

        let storage_error = DomainError::Storage("connection reset".to_string());
        assert!(storage_error.is_storage_error());
        assert_eq!(storage_error.category(), ErrorCategory::Storage);
    }

    #[test]
    fn test_error_messages() {
        let from = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let error = DomainError::IncorrectDates { from, to };
        assert!(error.to_string().contains("02.01.2024"));
        assert!(error.to_string().contains("01.01.2024"));

        let error = DomainError::validation("ProductPrice", "is less than or equal to 0");
        assert_eq!(error.field(), Some("ProductPrice"));
        assert!(error.to_string().contains("ProductPrice"));
    }
}
