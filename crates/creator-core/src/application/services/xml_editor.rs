//! Template- and file-backed XML editing.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
    },
    domain::DomainError,
    error::CreatorResult,
    xml::{XmlEditPlan, apply_plan},
};

pub struct XmlEditor<'a> {
    store: &'a dyn TemplateStore,
    filesystem: &'a dyn Filesystem,
}

impl<'a> XmlEditor<'a> {
    pub fn new(store: &'a dyn TemplateStore, filesystem: &'a dyn Filesystem) -> Self {
        Self { store, filesystem }
    }

    /// Load `template`, apply `plan` and write the result to `destination`.
    ///
    /// Nothing is written if any required step fails.
    #[instrument(skip(self, plan, destination), fields(destination = %destination.display(), steps = plan.len()))]
    pub fn render(
        &self,
        template: &str,
        plan: &XmlEditPlan,
        destination: &Path,
    ) -> CreatorResult<()> {
        let raw = self.store.load(template)?;
        let xml = apply_plan(&raw, plan)?;
        self.filesystem.write_file(destination, xml.as_bytes())
    }

    /// Read-modify-write an already generated document.
    #[instrument(skip(self, plan, path), fields(path = %path.display(), steps = plan.len()))]
    pub fn patch(&self, path: &Path, plan: &XmlEditPlan) -> CreatorResult<()> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::PrerequisiteMissing {
                path: path.to_path_buf(),
            }
            .into());
        }

        let bytes = self.filesystem.read_file(path)?;
        let text = String::from_utf8(bytes).map_err(|e| DomainError::MalformedXml {
            reason: format!("{} is not UTF-8: {e}", path.display()),
        })?;
        let xml = apply_plan(&text, plan)?;
        self.filesystem.update_file(path, xml.as_bytes())?;
        debug!("Document patched");
        Ok(())
    }
}
