//! Application layer for the addon creator.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService and its helpers)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    FlagInstaller, GenerationReport, GenerationService, InstallOutcome, SuiteReport,
    TemplateInstaller, XmlEditor,
};

pub use ports::{AssetFetcher, Filesystem, TemplateStore};

pub use error::ApplicationError;
