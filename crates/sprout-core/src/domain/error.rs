// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("invalid application name '{name}': {reason}")]
    InvalidApplicationName { name: String, reason: String },

    #[error("invalid language id '{language}'")]
    InvalidLanguage { language: String },

    #[error("unrecognized build system id '{id}' and dialect '{dialect}'")]
    UnknownBuildSystem { id: String, dialect: String },

    #[error("invalid manifest catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("no source writer for language '{language}'")]
    UnsupportedLanguage { language: String },

    #[error("boot version '{version}' is not available")]
    UnknownBootVersion { version: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPackageName { name, .. } => vec![
                format!("'{}' cannot be used as a package name", name),
                "Use a dot-separated name such as com.example.app".into(),
            ],
            Self::InvalidApplicationName { .. } => vec![
                "The application name becomes the main class name".into(),
                "Use letters, digits and underscores, e.g. DemoApplication".into(),
            ],
            Self::UnknownBuildSystem { .. } => vec![
                "Supported build systems: maven, gradle".into(),
                "Gradle accepts the dialects 'groovy' and 'kotlin'".into(),
            ],
            Self::UnsupportedLanguage { language } => vec![
                format!("'{}' has no main-class writer", language),
                "Supported languages: java, kotlin, groovy".into(),
            ],
            Self::InvalidCatalog(msg) => vec![
                "Check the catalog file passed with --catalog".into(),
                format!("Details: {}", msg),
            ],
            Self::UnknownBootVersion { .. } => {
                vec!["Run 'sprout versions' to see the available boot versions".into()]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPackageName { .. }
            | Self::InvalidApplicationName { .. }
            | Self::InvalidLanguage { .. }
            | Self::UnknownBuildSystem { .. }
            | Self::InvalidCatalog(_)
            | Self::InvalidVersion { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::UnsupportedLanguage { .. } | Self::UnknownBootVersion { .. } => {
                ErrorCategory::NotFound
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
