//! Local filesystem adapter using std::fs.
//!
//! Writes are staged in memory and flushed on [`commit`](Filesystem::commit),
//! so a generation that fails before committing leaves the disk untouched.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use creator_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::RelativePath,
    error::{CreatorError, CreatorResult},
};
use tracing::{debug, info, instrument};

/// Production filesystem rooted at a project directory.
#[derive(Debug)]
pub struct LocalFilesystem {
    root: PathBuf,
    staged: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
}

impl LocalFilesystem {
    /// Create an adapter rooted at `root`. The directory is created on commit.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            staged: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of writes waiting for [`commit`](Filesystem::commit).
    pub fn pending(&self) -> usize {
        self.staged.lock().map(|s| s.len()).unwrap_or(0)
    }

    fn resolve(&self, path: &Path) -> CreatorResult<PathBuf> {
        let relative = RelativePath::try_new(path)?;
        Ok(self.root.join(relative.as_path()))
    }

    fn stage(&self, path: &Path, contents: &[u8]) -> CreatorResult<()> {
        self.resolve(path)?;
        let mut staged = self
            .staged
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        staged.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let staged = self
            .staged
            .lock()
            .map(|s| s.contains_key(path))
            .unwrap_or(false);
        staged || self.resolve(path).is_ok_and(|p| p.exists())
    }

    fn create_file(&self, path: &Path, contents: &[u8]) -> CreatorResult<()> {
        if self.exists(path) {
            return Err(ApplicationError::WriteFailure {
                path: path.to_path_buf(),
                reason: "file already exists".into(),
            }
            .into());
        }
        self.stage(path, contents)
    }

    fn update_file(&self, path: &Path, contents: &[u8]) -> CreatorResult<()> {
        self.stage(path, contents)
    }

    fn read_file(&self, path: &Path) -> CreatorResult<Vec<u8>> {
        if let Some(bytes) = self
            .staged
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?
            .get(path)
        {
            return Ok(bytes.clone());
        }

        let full = self.resolve(path)?;
        std::fs::read(&full).map_err(|e| map_read_error(path, e))
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn commit(&self) -> CreatorResult<()> {
        let staged = {
            let mut guard = self
                .staged
                .lock()
                .map_err(|_| ApplicationError::StoreLockError)?;
            std::mem::take(&mut *guard)
        };

        let count = staged.len();
        for (path, contents) in staged {
            let full = self.resolve(&path)?;
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_write_error(&path, e, "create directory"))?;
            }
            std::fs::write(&full, contents).map_err(|e| map_write_error(&path, e, "write file"))?;
            debug!(path = %path.display(), "Flushed");
        }

        info!(files = count, "Staged writes committed");
        Ok(())
    }
}

fn map_write_error(path: &Path, e: io::Error, operation: &str) -> CreatorError {
    ApplicationError::WriteFailure {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn map_read_error(path: &Path, e: io::Error) -> CreatorError {
    ApplicationError::ReadFailure {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn nothing_reaches_disk_before_commit() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new(dir.path());

        fs.create_file(Path::new("legal/LICENSE.TXT"), b"MIT").unwrap();
        assert!(fs.exists(Path::new("legal/LICENSE.TXT")));
        assert!(!dir.path().join("legal/LICENSE.TXT").exists());
        assert_eq!(fs.pending(), 1);

        fs.commit().unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("legal/LICENSE.TXT")).unwrap(),
            "MIT"
        );
        assert_eq!(fs.pending(), 0);
    }

    #[test]
    fn create_refuses_existing_files_on_disk() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("pom.xml"), "<project/>").unwrap();
        let fs = LocalFilesystem::new(dir.path());

        assert!(fs.create_file(Path::new("pom.xml"), b"<x/>").is_err());
        fs.update_file(Path::new("pom.xml"), b"<y/>").unwrap();
        assert_eq!(fs.read_file(Path::new("pom.xml")).unwrap(), b"<y/>");
    }

    #[test]
    fn escaping_paths_are_rejected() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new(dir.path());
        assert!(fs.create_file(Path::new("../evil.txt"), b"x").is_err());
        assert!(!fs.exists(Path::new("../evil.txt")));
    }
}
