//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `creator-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: staged file operations
//!   - `TemplateStore`: raw template text
//!   - `AssetFetcher`: remote downloads (flag icons)
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{AssetFetcher, Filesystem, TemplateStore};

#[cfg(test)]
pub use output::MockAssetFetcher;
