//! `addon-creator simple` and `addon-creator advanced`.

use tracing::{info, instrument};

use crate::{
    cli::{AddonArgs, GlobalArgs},
    commands::{build_service, ensure_new_project, package, project_options},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonKind {
    Simple,
    Advanced,
}

/// Generate a standalone addon, or the nested variant when `--folder` is set.
///
/// A nested module joins an existing suite, so the existing-project check
/// only applies to standalone addons.
#[instrument(skip_all, fields(kind = ?kind, package = %args.project.package))]
pub fn execute(
    kind: AddonKind,
    args: AddonArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let package = package(&args.project)?;
    let folder = args
        .folder
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty());
    let options = project_options(&args.project, folder);

    let service = build_service(&global, &config)?;
    if folder.is_none() {
        ensure_new_project(&service, &global)?;
    }

    let spinner = output.spinner(&format!("Generating {package}..."));
    let result = match kind {
        AddonKind::Simple => service.create_simple(package, &options),
        AddonKind::Advanced => service.create_advanced(package, &options),
    };
    spinner.finish_and_clear();
    let report = result?;

    info!(artifact = %report.artifact_id, files = report.file_count(), "Addon generated");
    output.report(&report, &global.directory)?;
    Ok(())
}
