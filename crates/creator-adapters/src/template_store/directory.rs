//! Directory-backed template store.
//!
//! Lets users override individual templates without rebuilding: a name
//! `simple/obr-template.xml` is read from `<root>/simple/obr-template.xml`
//! when that file exists, otherwise from the fallback store.

use std::path::{Path, PathBuf};

use creator_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::RelativePath,
    error::CreatorResult,
};
use tracing::{debug, instrument};

pub struct DirectoryTemplateStore {
    root: PathBuf,
    fallback: Option<Box<dyn TemplateStore>>,
}

impl DirectoryTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: None,
        }
    }

    /// Consult `fallback` for names the directory does not provide.
    pub fn with_fallback(mut self, fallback: impl TemplateStore + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for DirectoryTemplateStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, name: &str) -> CreatorResult<String> {
        let relative = RelativePath::try_new(name)?;
        let path = self.root.join(relative.as_path());

        if path.is_file() {
            debug!(path = %path.display(), "Using template override");
            return std::fs::read_to_string(&path).map_err(|e| {
                ApplicationError::ReadFailure {
                    path: path.clone(),
                    reason: e.to_string(),
                }
                .into()
            });
        }

        match &self.fallback {
            Some(fallback) => fallback.load(name),
            None => Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()),
        }
    }
}
