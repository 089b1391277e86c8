//! Addon Creator Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for scaffolding Spring Roo addon projects,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        creator-cli (CLI)                │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         GenerationService               │
//! │  (installer, XML editor, flag fetch)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Ports (Filesystem, TemplateStore,   │
//! │            AssetFetcher)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   creator-adapters (Infra)              │
//! └─────────────────────────────────────────┘
//!
//!  Domain (catalog, plans, layout) and xml (document, paths, edit plans)
//!  are pure and sit underneath everything.
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use creator_core::prelude::*;
//!
//! let service = GenerationService::new(store, filesystem, fetcher, GeneratorConfig::default());
//! let package = PackageIdentity::new("com.acme.hello")?;
//! let report = service.create_simple(package, &ProjectOptions::new())?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod xml;

#[cfg(test)]
mod test_support;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GenerationService, SuiteReport,
        ports::{AssetFetcher, Filesystem, TemplateStore},
    };
    pub use crate::config::GeneratorConfig;
    pub use crate::domain::{
        Archetype, I18nRequest, Locale, NamedAsset, PackageIdentity, ProjectDescriptor,
        ProjectOptions, WrapperCoordinates, WrapperRequest,
    };
    pub use crate::error::{CreatorError, CreatorResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
