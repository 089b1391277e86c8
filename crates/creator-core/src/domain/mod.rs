// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the addon creator.
//!
//! Pure rules with no I/O: package naming, the archetype catalog, file
//! layout, placeholder contexts and the XML edit plans each archetype needs.
//! The application layer pairs these with ports to touch the outside world.
//!
//! - **No I/O**: no filesystem, network or template loading here
//! - **Data over dispatch**: archetype behavior is read from [`catalog`]
//! - **Validated values**: invalid packages and locales cannot be constructed

pub mod catalog;
pub mod context;
pub mod entities;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod manifest;
pub mod package;
pub mod plans;
pub mod value_objects;

mod validation;

pub use catalog::{
    ArchetypeSpec, ArtifactNaming, CapabilityCommands, DescriptionRule, DescriptorPatch,
    FileKind, InstallFile, LinkageRule,
};
pub use context::TemplateContext;
pub use entities::{
    I18nRequest, NamedAsset, ProjectDescriptor, ProjectOptions, RelativePath, SuitePlan,
    WrapperCoordinates, WrapperRequest,
};
pub use error::{DomainError, ErrorCategory};
pub use layout::ModuleLayout;
pub use package::PackageIdentity;
pub use validation::DomainValidator;
pub use value_objects::{Archetype, Locale};
