//! Unified error handling for Construct Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Construct Core operations.
///
/// This enum wraps all possible errors that can occur when using construct-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum ConstructError {
    /// Errors from the domain layer (invalid names, rules, paths).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (source, render, filesystem failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ConstructError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in construct".into(),
                "Please report this issue at: https://github.com/bmorton/construct/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    ///
    /// Only source acquisition touches the network, so only its failures
    /// may succeed on a second attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::SourceUnavailable { .. })
                | Self::Application(ApplicationError::SourceSyncFailed { .. })
        )
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
pub type ConstructResult<T> = Result<T, ConstructError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn application_errors_display_without_prefix() {
        let err: ConstructError = ApplicationError::MissingArgument { argument: "name" }.into();
        assert_eq!(err.to_string(), "Missing required argument: name");
    }

    #[test]
    fn source_failures_are_retryable() {
        let unavailable: ConstructError = ApplicationError::SourceUnavailable {
            reference: "https://example.com/t".into(),
            reason: "timed out".into(),
        }
        .into();
        let exists: ConstructError = ApplicationError::DestinationExists {
            path: PathBuf::from("/tmp/foo"),
        }
        .into();

        assert!(unavailable.is_retryable());
        assert!(!exists.is_retryable());
    }

    #[test]
    fn domain_validation_maps_to_validation_category() {
        let err: ConstructError = DomainError::InvalidName {
            name: ".hidden".into(),
            reason: "name cannot start with '.'".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
