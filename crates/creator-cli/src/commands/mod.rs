//! Command handlers.
//!
//! Each handler converts parsed arguments into core requests, runs the
//! [`GenerationService`] and renders the report. The wiring of adapters to
//! ports happens once, in [`build_service`].

use tracing::debug;

use creator_adapters::{DirectoryTemplateStore, HttpAssetFetcher, InMemoryStore, LocalFilesystem};
use creator_core::{
    application::{ApplicationError, GenerationService, TemplateStore},
    domain::{PackageIdentity, ProjectOptions},
    error::CreatorError,
};

use crate::{
    cli::{GlobalArgs, ProjectArgs},
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod addon;
pub mod completions;
pub mod config;
pub mod i18n;
pub mod suite;
pub mod wrapper;

/// Wire the adapters for a generation rooted at `--directory`.
///
/// Templates come from the built-in set, overlaid by `templates.local_path`
/// when that directory exists.
pub(crate) fn build_service(global: &GlobalArgs, config: &AppConfig) -> CliResult<GenerationService> {
    let builtin = InMemoryStore::with_builtin()?;
    let store: Box<dyn TemplateStore> = match config.template_dir() {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template overrides");
            Box::new(DirectoryTemplateStore::new(dir).with_fallback(builtin))
        }
        None => Box::new(builtin),
    };

    Ok(GenerationService::new(
        store,
        Box::new(LocalFilesystem::new(&global.directory)),
        Box::new(HttpAssetFetcher::new()?),
        config.generator(),
    ))
}

/// Refuse to generate over an existing project.
pub(crate) fn ensure_new_project(service: &GenerationService, global: &GlobalArgs) -> CliResult<()> {
    if service.can_create() {
        return Ok(());
    }
    Err(CliError::Core(
        ApplicationError::ProjectExists {
            path: global.directory.join("pom.xml"),
        }
        .into(),
    ))
}

pub(crate) fn package(args: &ProjectArgs) -> CliResult<PackageIdentity> {
    PackageIdentity::new(args.package.trim())
        .map_err(CreatorError::from)
        .map_err(CliError::from)
}

pub(crate) fn project_options(args: &ProjectArgs, folder: Option<&str>) -> ProjectOptions {
    ProjectOptions {
        description: args.description.clone(),
        project_name: args.project_name.clone(),
        folder: folder.map(str::to_owned),
    }
}
