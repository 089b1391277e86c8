//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use creator_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CreatorResult,
};

/// In-memory staged filesystem.
///
/// Clones share state, so a test can hand one clone to the service and keep
/// another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    committed: BTreeMap<PathBuf, Vec<u8>>,
    staged: BTreeMap<PathBuf, Vec<u8>>,
    commits: usize,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a committed file (testing helper).
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.committed.insert(path.into(), contents.into());
        }
        self
    }

    /// Committed contents as text (testing helper).
    pub fn read_text(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let bytes = inner.committed.get(path.as_ref())?;
        String::from_utf8(bytes.clone()).ok()
    }

    /// Committed paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.committed.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn staged_count(&self) -> usize {
        self.inner.read().map(|i| i.staged.len()).unwrap_or(0)
    }

    pub fn commit_count(&self) -> usize {
        self.inner.read().map(|i| i.commits).unwrap_or(0)
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|i| i.staged.contains_key(path) || i.committed.contains_key(path))
            .unwrap_or(false)
    }

    fn create_file(&self, path: &Path, contents: &[u8]) -> CreatorResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.staged.contains_key(path) || inner.committed.contains_key(path) {
            return Err(ApplicationError::WriteFailure {
                path: path.to_path_buf(),
                reason: "file already exists".into(),
            }
            .into());
        }
        inner.staged.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn update_file(&self, path: &Path, contents: &[u8]) -> CreatorResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.staged.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> CreatorResult<Vec<u8>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .staged
            .get(path)
            .or_else(|| inner.committed.get(path))
            .cloned()
            .ok_or_else(|| {
                ApplicationError::ReadFailure {
                    path: path.to_path_buf(),
                    reason: "no such file".into(),
                }
                .into()
            })
    }

    fn commit(&self) -> CreatorResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let staged = std::mem::take(&mut inner.staged);
        inner.committed.extend(staged);
        inner.commits += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_writes_are_visible_but_not_committed() {
        let fs = MemoryFilesystem::new();
        fs.create_file(Path::new("pom.xml"), b"<project/>").unwrap();

        assert!(fs.exists(Path::new("pom.xml")));
        assert_eq!(fs.read_file(Path::new("pom.xml")).unwrap(), b"<project/>");
        assert_eq!(fs.read_text("pom.xml"), None);

        fs.commit().unwrap();
        assert_eq!(fs.read_text("pom.xml").as_deref(), Some("<project/>"));
        assert_eq!(fs.staged_count(), 0);
        assert_eq!(fs.commit_count(), 1);
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.write_file(Path::new("readme.txt"), b"hi").unwrap();
        fs.commit().unwrap();
        assert_eq!(handle.list_files(), vec![PathBuf::from("readme.txt")]);
    }

    #[test]
    fn create_refuses_committed_files() {
        let fs = MemoryFilesystem::new().with_file("pom.xml", "<project/>");
        assert!(fs.create_file(Path::new("pom.xml"), b"<x/>").is_err());
    }
}
