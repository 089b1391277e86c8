use crate::domain::{
    catalog::{ArchetypeSpec, ArtifactNaming},
    entities::{ProjectDescriptor, WrapperCoordinates},
    error::DomainError,
};

/// Centralized checks run before anything is written.
pub struct DomainValidator;

impl DomainValidator {
    /// A descriptor must agree with its archetype on nesting.
    pub fn validate_descriptor(
        spec: &ArchetypeSpec,
        descriptor: &ProjectDescriptor,
    ) -> Result<(), DomainError> {
        match (spec.artifact, descriptor.folder()) {
            (ArtifactNaming::Folder, None) => {
                Err(DomainError::MissingRequiredField { field: "folder" })
            }
            (ArtifactNaming::Package | ArtifactNaming::Wrapped, Some(folder)) => {
                Err(DomainError::InvalidPackage {
                    package: descriptor.identity().to_string(),
                    reason: format!(
                        "{} projects are generated at the root, not in '{folder}'",
                        spec.archetype
                    ),
                })
            }
            _ => Ok(()),
        }
    }

    pub fn validate_wrapper(coordinates: &WrapperCoordinates) -> Result<(), DomainError> {
        coordinates.validate()
    }
}
