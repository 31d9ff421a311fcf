//! Unified error handling for clientgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for clientgen core operations.
#[derive(Debug, Error, Clone)]
pub enum GenError {
    /// Errors from the domain layer (resolution and expansion failures).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (port failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl GenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type GenResult<T> = Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_message() {
        let err: GenError = DomainError::ModelNotFound {
            model_name: "foo".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Unable to get models for foo");
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn application_errors_keep_their_category() {
        let err: GenError = ApplicationError::StoreLockError.into();
        assert_eq!(err.category(), ErrorCategory::Internal);

        let err: GenError = DomainError::UnterminatedBlock {
            marker: "/*eachVersion*/".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
