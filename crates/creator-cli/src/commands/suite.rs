//! `addon-creator suite`.

use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, SuiteArgs},
    commands::{build_service, ensure_new_project, package, project_options},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(package = %args.project.package))]
pub fn execute(
    args: SuiteArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let package = package(&args.project)?;
    let options = project_options(&args.project, None);

    let service = build_service(&global, &config)?;
    ensure_new_project(&service, &global)?;

    output.header(&format!("Creating addon suite for {package}"))?;
    let spinner = output.spinner("Generating modules...");
    let result = service.create_suite(package, &options);
    spinner.finish_and_clear();
    let report = result?;

    info!(modules = report.modules.len(), files = report.file_count(), "Suite generated");
    output.suite_report(&report, &global.directory)?;
    Ok(())
}
