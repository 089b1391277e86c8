//! Template substitution engine.
//!
//! Loads raw template text, applies a [`TemplateContext`] and creates the
//! destination file. A destination that already exists is never touched, so
//! re-running a generation is safe.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, TemplateStore},
    domain::TemplateContext,
    error::CreatorResult,
};

const RESOURCE_BUNDLE: &str = "resources";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Created,
    /// Destination already present.
    Skipped,
}

pub struct TemplateInstaller<'a> {
    store: &'a dyn TemplateStore,
    filesystem: &'a dyn Filesystem,
}

impl<'a> TemplateInstaller<'a> {
    pub fn new(store: &'a dyn TemplateStore, filesystem: &'a dyn Filesystem) -> Self {
        Self { store, filesystem }
    }

    #[instrument(skip(self, context, destination), fields(destination = %destination.display()))]
    pub fn install(
        &self,
        template: &str,
        context: &TemplateContext,
        destination: &Path,
    ) -> CreatorResult<InstallOutcome> {
        if self.filesystem.exists(destination) {
            debug!("Destination exists, skipping");
            return Ok(InstallOutcome::Skipped);
        }

        let raw = self.store.load(template)?;
        let rendered = context.apply(&raw);
        self.filesystem.create_file(destination, rendered.as_bytes())?;
        Ok(InstallOutcome::Created)
    }

    /// Copy `resources/<file>` verbatim when the destination is absent.
    pub fn copy_resource(&self, file_name: &str, destination: &Path) -> CreatorResult<InstallOutcome> {
        self.install(
            &format!("{RESOURCE_BUNDLE}/{file_name}"),
            &TemplateContext::new(),
            destination,
        )
    }
}
