//! Per-call generation inputs.
//!
//! A [`ProjectDescriptor`] is built for one archetype generation, consumed
//! immediately and never persisted. The request types carry the extra inputs
//! the i18n and wrapper archetypes need on top of a descriptor.

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    package::PackageIdentity,
    value_objects::{Archetype, Locale},
};

/// Optional inputs shared by every generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOptions {
    pub description: Option<String>,
    pub project_name: Option<String>,
    pub folder: Option<String>,
}

impl ProjectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }
}

/// Everything needed to generate one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    identity: PackageIdentity,
    archetype: Archetype,
    description: Option<String>,
    display_name: String,
    folder: Option<String>,
}

impl ProjectDescriptor {
    /// Build a descriptor, defaulting the display name from the package.
    ///
    /// Blank descriptions, names and folders count as absent.
    pub fn new(
        identity: PackageIdentity,
        archetype: Archetype,
        options: &ProjectOptions,
    ) -> Result<Self, DomainError> {
        let description = non_blank(options.description.as_deref());
        let folder = non_blank(options.folder.as_deref());
        let display_name = non_blank(options.project_name.as_deref())
            .unwrap_or_else(|| identity.default_project_name());

        if let Some(folder) = &folder {
            if folder.contains(['/', '\\']) || folder.starts_with('.') {
                return Err(DomainError::InvalidPackage {
                    package: identity.to_string(),
                    reason: format!("module folder '{folder}' must be a plain directory name"),
                });
            }
        }

        Ok(Self {
            identity,
            archetype,
            description,
            display_name,
            folder,
        })
    }

    pub fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }
}

/// A named blob supplied by the caller (message bundle, flag image).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedAsset {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl NamedAsset {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Inputs for the i18n language bundle.
#[derive(Debug, Clone)]
pub struct I18nRequest {
    pub package: PackageIdentity,
    pub locale: Locale,
    pub message_bundle: NamedAsset,
    /// When absent, the flag is extracted from the configured icon archive.
    pub flag: Option<NamedAsset>,
    /// When absent, derived from the bundled country table.
    pub language: Option<String>,
    pub options: ProjectOptions,
}

/// Maven coordinates and metadata of the library being wrapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrapperCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub vendor_name: String,
    pub license_url: String,
    pub doc_url: Option<String>,
    pub osgi_imports: Option<String>,
}

impl WrapperCoordinates {
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("group_id", &self.group_id),
            ("artifact_id", &self.artifact_id),
            ("version", &self.version),
            ("vendor_name", &self.vendor_name),
            ("license_url", &self.license_url),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::MissingRequiredField { field });
            }
        }
        Ok(())
    }
}

/// Inputs for the OSGi wrapper archetype.
#[derive(Debug, Clone)]
pub struct WrapperRequest {
    pub package: PackageIdentity,
    pub coordinates: WrapperCoordinates,
    pub options: ProjectOptions,
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
