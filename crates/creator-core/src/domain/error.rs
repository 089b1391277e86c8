// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports can keep them around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid package '{package}': {reason}")]
    InvalidPackage { package: String, reason: String },

    #[error("Invalid locale '{0}'")]
    InvalidLocale(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Catalog Errors
    // ========================================================================
    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),

    // ========================================================================
    // XML Errors
    // ========================================================================
    #[error("Invalid structural path '{path}': {reason}")]
    InvalidStructuralPath { path: String, reason: String },

    #[error("Malformed XML document: {reason}")]
    MalformedXml { reason: String },

    #[error("Required node '{path}' not found in document")]
    RequiredNodeMissing { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPackage { package, .. } => vec![
                format!("'{}' is not a usable top-level package", package),
                "Use a dotted identifier such as com.example.addon".into(),
                "Each segment must start with a letter or underscore".into(),
            ],
            Self::InvalidLocale(locale) => vec![
                format!("Could not read locale '{}'", locale),
                "Use language_COUNTRY form, e.g. fr_FR or de_DE".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
            Self::RequiredNodeMissing { path } => vec![
                format!("The template has no node at {}", path),
                "The template set is corrupted; please report this issue".into(),
            ],
            Self::MalformedXml { .. } => vec![
                "An XML template or generated file could not be parsed".into(),
                "If you edited a generated pom.xml, check it is well-formed".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPackage { .. }
            | Self::InvalidLocale(_)
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::UnknownArchetype(_) => ErrorCategory::NotFound,
            Self::InvalidStructuralPath { .. }
            | Self::MalformedXml { .. }
            | Self::RequiredNodeMissing { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
