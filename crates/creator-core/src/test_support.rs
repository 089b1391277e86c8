//! In-crate fakes for the driven ports.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::{
    ApplicationError,
    ports::{Filesystem, TemplateStore},
};
use crate::error::CreatorResult;

/// Unstaged map-backed file system.
#[derive(Default)]
pub struct FakeFs {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    pub commits: Mutex<usize>,
}

impl FakeFs {
    pub fn with_file(self, path: &str, contents: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), contents.as_bytes().to_vec());
        self
    }

    pub fn text(&self, path: &str) -> String {
        String::from_utf8(self.files.lock().unwrap()[Path::new(path)].clone()).unwrap()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl Filesystem for FakeFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn create_file(&self, path: &Path, contents: &[u8]) -> CreatorResult<()> {
        let mut files = self.files.lock().unwrap();
        if files.contains_key(path) {
            return Err(ApplicationError::WriteFailure {
                path: path.to_path_buf(),
                reason: "file exists".into(),
            }
            .into());
        }
        files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn update_file(&self, path: &Path, contents: &[u8]) -> CreatorResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> CreatorResult<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::ReadFailure {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
    }

    fn commit(&self) -> CreatorResult<()> {
        *self.commits.lock().unwrap() += 1;
        Ok(())
    }
}

pub struct FakeStore(pub HashMap<&'static str, &'static str>);

impl FakeStore {
    pub fn new<const N: usize>(entries: [(&'static str, &'static str); N]) -> Self {
        Self(HashMap::from(entries))
    }
}

impl TemplateStore for FakeStore {
    fn load(&self, name: &str) -> CreatorResult<String> {
        self.0.get(name).map(|t| t.to_string()).ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }
}
