// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside `ConstructError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid rename rule '{pattern}': {reason}")]
    InvalidRenameRule { pattern: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Walk Invariants
    // ========================================================================
    #[error("Path '{path}' is not inside '{root}'")]
    PathOutsideRoot { path: String, root: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Use letters, digits, hyphens and underscores".into(),
                "Examples: blog, user_service, widget".into(),
            ],
            Self::InvalidRenameRule { pattern, .. } => vec![
                format!("The pattern '{}' is not a valid regular expression", pattern),
                "Check [[generate.rename_rules]] in your config file".into(),
                "Escape literal dots as '\\.'".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::InvalidRenameRule { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::PathOutsideRoot { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
