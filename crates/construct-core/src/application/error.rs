//! Application layer errors.
//!
//! These errors represent failures in orchestration: acquiring the template
//! source, materializing the tree, printing instructions. Validation of
//! names and rules is `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
///
/// Every variant is terminal: the command stops at the first one and files
/// already written stay in place.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A required positional argument was not supplied.
    #[error("Missing required argument: {argument}")]
    MissingArgument { argument: &'static str },

    /// The template could not be fetched (clone failed, bad reference).
    #[error("Template source '{reference}' is unavailable: {reason}")]
    SourceUnavailable { reference: String, reason: String },

    /// A cached template could not be brought up to date.
    #[error("Failed to update template cache at {path}: {reason}")]
    SourceSyncFailed { path: PathBuf, reason: String },

    /// `new` refuses to write into an existing directory.
    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// A template file failed to parse or execute.
    #[error("Failed to render {path}: {reason}")]
    RenderFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The instructions template failed to render.
    #[error("Failed to render instructions {path}: {reason}")]
    InstructionsRenderFailed { path: PathBuf, reason: String },

    /// The template source has no subtree for the requested generator.
    #[error("Unknown generator '{generator}': no directory at {path}")]
    UnknownGenerator { generator: String, path: PathBuf },

    /// Shared state lock poisoned.
    #[error("Internal lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { argument } => vec![
                format!("Provide the <{}> argument", argument.to_uppercase()),
                "Run with --help to see usage".into(),
            ],
            Self::SourceUnavailable { reference, .. } => vec![
                format!("Could not fetch: {}", reference),
                "Check the URL and your network connection".into(),
                "Or point --template at a local directory".into(),
            ],
            Self::SourceSyncFailed { path, .. } => vec![
                format!("The cached copy at {} could not be updated", path.display()),
                "Remove that directory to force a fresh clone".into(),
            ],
            Self::DestinationExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::RenderFailed { path, .. } | Self::InstructionsRenderFailed { path, .. } => vec![
                format!("Check the template syntax in {}", path.display()),
                "Files written before the failure were left in place".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::UnknownGenerator { generator, .. } => vec![
                format!("The template has no '{}' generator", generator),
                "Generators are the top-level directories of the template repository".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. } | Self::DestinationExists { .. } => {
                ErrorCategory::Validation
            }
            Self::SourceUnavailable { .. } | Self::UnknownGenerator { .. } => {
                ErrorCategory::NotFound
            }
            Self::SourceSyncFailed { .. }
            | Self::RenderFailed { .. }
            | Self::FilesystemError { .. }
            | Self::InstructionsRenderFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
