//! Suite generation.
//!
//! Runs the suite's modules in order, then cross-wires them: the suite and
//! repository POMs gain dependencies on both addons and the suite module gets
//! its subsystem manifest.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    application::services::{
        generator::{GenerationReport, GenerationService},
        installer::InstallOutcome,
    },
    domain::{
        ModuleLayout, PackageIdentity, ProjectOptions, SuitePlan, manifest::suite_manifest,
        plans::addon_dependencies_plan,
    },
    error::CreatorResult,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    /// One report per module, in generation order.
    pub modules: Vec<GenerationReport>,
    /// Root-level copies written by this run.
    pub root_files: Vec<PathBuf>,
    /// Root-level copies left as they were.
    pub root_skipped: Vec<PathBuf>,
    /// POMs that received the addon dependencies.
    pub patched: Vec<PathBuf>,
    pub manifest: PathBuf,
}

impl SuiteReport {
    pub fn file_count(&self) -> usize {
        self.modules.iter().map(GenerationReport::file_count).sum::<usize>()
            + self.root_files.len()
            + 1
    }
}

impl GenerationService {
    /// Multi-module addon suite: parent, OSGi aggregator, two addons, suite
    /// module and OBR repository.
    #[instrument(skip(self, options), fields(request_id = %Uuid::new_v4(), package = %package))]
    pub fn create_suite(
        &self,
        package: PackageIdentity,
        options: &ProjectOptions,
    ) -> CreatorResult<SuiteReport> {
        let plan = SuitePlan::new(package, options)?;

        let mut modules = Vec::with_capacity(plan.modules().len());
        for descriptor in plan.modules() {
            modules.push(self.generate_module(descriptor)?);
        }

        let (root_files, root_skipped) = self.copy_root_files(&plan)?;
        let patched = self.inject_addon_dependencies(&plan)?;
        let manifest = self.write_manifest(&plan)?;
        self.filesystem().commit()?;

        info!(modules = modules.len(), patched = patched.len(), "Suite generated");
        Ok(SuiteReport {
            modules,
            root_files,
            root_skipped,
            patched,
            manifest,
        })
    }

    /// Verbatim copies at the suite root, split into written and kept.
    fn copy_root_files(&self, plan: &SuitePlan) -> CreatorResult<(Vec<PathBuf>, Vec<PathBuf>)> {
        let root = ModuleLayout::new(plan.package(), None);
        let installer = self.installer();
        let (mut written, mut kept) = (Vec::new(), Vec::new());
        for file in plan.root_files() {
            let destination = root.static_copy(file);
            match installer.copy_resource(file, &destination)? {
                InstallOutcome::Created => written.push(destination),
                InstallOutcome::Skipped => kept.push(destination),
            }
        }
        Ok((written, kept))
    }

    /// Add both addons as dependencies of every aggregating module.
    ///
    /// Fails with `PrerequisiteMissing` if a target POM was never generated.
    pub(super) fn inject_addon_dependencies(&self, plan: &SuitePlan) -> CreatorResult<Vec<PathBuf>> {
        let edits = addon_dependencies_plan(plan.package())?;
        let editor = self.editor();

        let mut patched = Vec::new();
        for target in plan.dependency_targets() {
            let pom = ModuleLayout::new(plan.package(), Some(target)).pom();
            editor.patch(&pom, &edits)?;
            patched.push(pom);
        }
        Ok(patched)
    }

    fn write_manifest(&self, plan: &SuitePlan) -> CreatorResult<PathBuf> {
        let path = ModuleLayout::new(plan.package(), Some(plan.manifest_folder())).manifest();
        let text = suite_manifest(plan.package(), plan.description(), plan.display_name());
        self.filesystem().write_file(&path, text.as_bytes())?;
        Ok(path)
    }
}
