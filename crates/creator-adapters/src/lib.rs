//! Infrastructure adapters for the addon creator.
//!
//! This crate implements the ports defined in `creator_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod fetcher;
pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use fetcher::HttpAssetFetcher;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{DirectoryTemplateStore, InMemoryStore};
