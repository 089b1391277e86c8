//! Application services - orchestrate use cases.
//!
//! `GenerationService` is the entry point; the installer, XML editor and
//! flag installer are the building blocks it sequences.

pub mod flag;
pub mod generator;
pub mod installer;
pub mod suite;
pub mod xml_editor;

pub use flag::FlagInstaller;
pub use generator::{GenerationReport, GenerationService};
pub use installer::{InstallOutcome, TemplateInstaller};
pub use suite::SuiteReport;
pub use xml_editor::XmlEditor;
