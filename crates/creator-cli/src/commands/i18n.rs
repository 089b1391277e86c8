//! `addon-creator i18n`.

use std::path::Path;

use tracing::{debug, info, instrument};

use creator_core::{
    domain::{I18nRequest, Locale, NamedAsset},
    error::CreatorError,
};

use crate::{
    cli::{GlobalArgs, I18nArgs},
    commands::{build_service, ensure_new_project, package, project_options},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(package = %args.project.package, locale = %args.locale))]
pub fn execute(
    args: I18nArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let package = package(&args.project)?;
    let locale = args
        .locale
        .trim()
        .parse::<Locale>()
        .map_err(CreatorError::from)?;

    let message_bundle = read_asset(&args.message_bundle)?;
    let flag = args.flag_graphic.as_deref().map(read_asset).transpose()?;
    if flag.is_none() {
        debug!(url = %config.i18n.iconset_url, "Flag will be taken from the icon set");
    }

    let request = I18nRequest {
        package,
        locale,
        message_bundle,
        flag,
        language: args.language.clone(),
        options: project_options(&args.project, None),
    };

    let service = build_service(&global, &config)?;
    ensure_new_project(&service, &global)?;

    let spinner = output.spinner("Generating language bundle...");
    let result = service.create_i18n(request);
    spinner.finish_and_clear();
    let report = result?;

    info!(artifact = %report.artifact_id, "Language bundle generated");
    output.report(&report, &global.directory)?;
    Ok(())
}

/// Read a user-supplied file, keeping its file name.
fn read_asset(path: &Path) -> CliResult<NamedAsset> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("'{}' does not name a file", path.display()),
            source: None,
        })?;
    let bytes = std::fs::read(path).with_cli_context(|| format!("reading {}", path.display()))?;
    Ok(NamedAsset::new(file_name, bytes))
}
