//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A template resource could not be located.
    #[error("Resource not found: {id}")]
    ResourceNotFound { id: String },

    /// In-memory store access failed (lock poisoned).
    #[error("Store lock poisoned")]
    StoreLockError,

    /// Rendering the main source file failed.
    #[error("Source rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// A resource copy failed under the abort policy.
    #[error("Copying '{resource}' failed: {error}")]
    CopyAborted { resource: String, error: CopyError },

    /// Boot version metadata could not be read.
    #[error("Boot metadata unavailable: {reason}")]
    MetadataUnavailable { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that the package name does not produce an unusable path".into(),
            ],
            Self::ResourceNotFound { id } => vec![
                format!("No template resource named '{}'", id),
                "Check --resources or the catalog passed with --catalog".into(),
            ],
            Self::StoreLockError => vec!["The in-memory store is poisoned; retry the run".into()],
            Self::CopyAborted { .. } => vec![
                "Files copied before the failure were kept".into(),
                "Use --on-copy-error continue to copy the remaining files".into(),
            ],
            Self::MetadataUnavailable { .. } => {
                vec!["The bundled boot metadata could not be read".into()]
            }
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResourceNotFound { .. } => ErrorCategory::NotFound,
            Self::CopyAborted { error, .. } => match error {
                CopyError::ResourceNotFound { .. } => ErrorCategory::NotFound,
                _ => ErrorCategory::Internal,
            },
            Self::FilesystemError { .. }
            | Self::StoreLockError
            | Self::RenderingFailed { .. }
            | Self::MetadataUnavailable { .. } => ErrorCategory::Internal,
        }
    }
}

/// Failure while copying a single template resource.
///
/// These are reported per resource; whether they stop the run is decided by
/// the caller's `FailurePolicy`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CopyError {
    #[error("resource '{id}' not found")]
    ResourceNotFound { id: String },

    #[error("reading resource failed: {reason}")]
    Read { reason: String },

    #[error("line {line} is not valid UTF-8")]
    Encoding { line: usize },

    #[error("writing {} failed: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}
