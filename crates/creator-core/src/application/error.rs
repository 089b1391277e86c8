//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during generation.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template store has no entry under this name.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// A file an edit depends on was never generated.
    #[error("Prerequisite missing: {path} not found")]
    PrerequisiteMissing { path: PathBuf },

    /// The icon archive has no entry for the locale.
    #[error("Could not acquire {asset} for locale {locale}")]
    AssetNotFound { asset: String, locale: String },

    /// Downloading or unpacking a remote asset failed.
    #[error("Fetching {url} failed: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Could not write {path}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },

    #[error("Could not read {path}: {reason}")]
    ReadFailure { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,

    /// A project already exists where a new one would be created.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name } => vec![
                format!("No template named '{}'", name),
                "Check templates.local_path in your configuration".into(),
                "Remove the override to fall back to the built-in templates".into(),
            ],
            Self::PrerequisiteMissing { path } => vec![
                format!("Expected {} to have been generated", path.display()),
                "Re-run the suite command from an empty directory".into(),
            ],
            Self::AssetNotFound { .. } => vec![
                "The icon set has no flag for this country".into(),
                "Use --flag-graphic to specify the flag manually".into(),
            ],
            Self::FetchFailed { url, .. } => vec![
                format!("Could not download {}", url),
                "Check your network connection".into(),
                "Point i18n.iconset_url at a reachable archive, or pass --flag-graphic".into(),
            ],
            Self::WriteFailure { path, .. } | Self::ReadFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Found an existing project at {}", path.display()),
                "Run the command from an empty directory".into(),
                "Or pass a different --directory".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::AssetNotFound { .. } => ErrorCategory::NotFound,
            Self::PrerequisiteMissing { .. } | Self::ProjectExists { .. } => {
                ErrorCategory::Validation
            }
            Self::FetchFailed { .. }
            | Self::WriteFailure { .. }
            | Self::ReadFailure { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
