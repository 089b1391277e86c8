//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `creator-adapters` crate provides implementations.

use std::path::Path;

use crate::error::CreatorResult;

/// Port for a staged file system.
///
/// Implemented by:
/// - `creator_adapters::filesystem::LocalFilesystem` (production)
/// - `creator_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - All paths are relative to the generation root
/// - Writes are staged and become durable on [`commit`](Filesystem::commit)
/// - Reads and `exists` see staged writes
pub trait Filesystem: Send + Sync {
    /// Check if a file exists (staged or committed).
    fn exists(&self, path: &Path) -> bool;

    /// Stage a new file. Fails if the file already exists.
    fn create_file(&self, path: &Path, contents: &[u8]) -> CreatorResult<()>;

    /// Stage new contents for an existing file.
    fn update_file(&self, path: &Path, contents: &[u8]) -> CreatorResult<()>;

    fn read_file(&self, path: &Path) -> CreatorResult<Vec<u8>>;

    /// Flush staged writes.
    fn commit(&self) -> CreatorResult<()>;

    /// Create or overwrite.
    fn write_file(&self, path: &Path, contents: &[u8]) -> CreatorResult<()> {
        if self.exists(path) {
            self.update_file(path, contents)
        } else {
            self.create_file(path, contents)
        }
    }
}

/// Port for template retrieval.
///
/// Names are `<bundle>/<file>`, e.g. `simple/obr-template.xml`.
///
/// Implemented by:
/// - `creator_adapters::template_store::InMemoryStore` (built-in templates)
/// - `creator_adapters::template_store::DirectoryTemplateStore` (user overrides)
pub trait TemplateStore: Send + Sync {
    fn load(&self, name: &str) -> CreatorResult<String>;
}

/// Port for downloading remote assets.
///
/// Implemented by:
/// - `creator_adapters::fetcher::HttpAssetFetcher`
#[cfg_attr(test, mockall::automock)]
pub trait AssetFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> CreatorResult<Vec<u8>>;
}
