//! `addon-creator wrapper`.

use tracing::{info, instrument};

use creator_core::domain::{WrapperCoordinates, WrapperRequest};

use crate::{
    cli::{GlobalArgs, WrapperArgs},
    commands::{build_service, ensure_new_project, package, project_options},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(package = %args.project.package, artifact = %args.artifact_id))]
pub fn execute(
    args: WrapperArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = WrapperRequest {
        package: package(&args.project)?,
        options: project_options(&args.project, None),
        coordinates: coordinates(args),
    };

    let service = build_service(&global, &config)?;
    ensure_new_project(&service, &global)?;

    let spinner = output.spinner("Generating wrapper bundle...");
    let result = service.create_wrapper(request);
    spinner.finish_and_clear();
    let report = result?;

    info!(artifact = %report.artifact_id, "Wrapper generated");
    output.report(&report, &global.directory)?;
    Ok(())
}

fn coordinates(args: WrapperArgs) -> WrapperCoordinates {
    WrapperCoordinates {
        group_id: args.group_id,
        artifact_id: args.artifact_id,
        version: args.library_version,
        vendor_name: args.vendor_name,
        license_url: args.license_url,
        doc_url: args.doc_url,
        osgi_imports: args.osgi_imports,
    }
}
