//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No generation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "addon-creator",
    bin_name = "addon-creator",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold Spring Roo addon projects",
    long_about = "addon-creator generates Maven/OSGi addon projects: simple and \
                  advanced addons, language bundles, library wrappers and \
                  complete multi-module addon suites.",
    after_help = "EXAMPLES:\n\
        \x20 addon-creator simple com.acme.greeter --description \"Says hello\"\n\
        \x20 addon-creator suite  com.acme.flightbooking -C ./flightbooking\n\
        \x20 addon-creator i18n   com.acme.lang.fr --locale fr_FR --message-bundle messages_fr.properties\n\
        \x20 addon-creator completions bash > /usr/share/bash-completion/completions/addon-creator",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a simple addon.
    #[command(
        about = "Create a simple addon",
        after_help = "EXAMPLES:\n\
            \x20 addon-creator simple com.acme.greeter\n\
            \x20 addon-creator simple com.acme.greeter --folder addon-simple --project-name Greeter"
    )]
    Simple(AddonArgs),

    /// Create an advanced addon with metadata provider and annotation.
    #[command(
        about = "Create an advanced addon",
        after_help = "EXAMPLES:\n\
            \x20 addon-creator advanced com.acme.audit --description \"Audit trail\""
    )]
    Advanced(AddonArgs),

    /// Create a multi-module addon suite.
    #[command(
        about = "Create an addon suite",
        after_help = "EXAMPLES:\n\
            \x20 addon-creator suite com.acme.flightbooking --project-name \"Flight Booking\""
    )]
    Suite(SuiteArgs),

    /// Create a language bundle for the web scaffolding.
    #[command(
        about = "Create a language bundle",
        after_help = "EXAMPLES:\n\
            \x20 addon-creator i18n com.acme.lang.fr --locale fr_FR --message-bundle messages_fr.properties\n\
            \x20 addon-creator i18n com.acme.lang.de --locale de_DE --message-bundle messages_de.properties \\\n\
            \x20     --flag-graphic de.png --language Deutsch"
    )]
    I18n(I18nArgs),

    /// Wrap a plain Maven library as an OSGi bundle.
    #[command(
        about = "Wrap a library as an OSGi bundle",
        after_help = "EXAMPLES:\n\
            \x20 addon-creator wrapper com.acme.wrapping.h2 --group-id com.h2database \\\n\
            \x20     --artifact-id h2 --library-version 2.2.224 --vendor-name \"H2 Group\" \\\n\
            \x20     --license-url https://h2database.com/html/license.html"
    )]
    Wrapper(WrapperArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 addon-creator completions bash > ~/.local/share/bash-completion/completions/addon-creator\n\
            \x20 addon-creator completions zsh  > ~/.zfunc/_addon-creator"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(about = "Configuration inspection", subcommand)]
    Config(ConfigCommands),
}

// ── generation arguments ──────────────────────────────────────────────────────

/// Options shared by every archetype.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Top-level Java package, e.g. `com.acme.greeter`.
    #[arg(value_name = "PACKAGE", help = "Top-level package of the addon")]
    pub package: String,

    #[arg(long = "description", value_name = "TEXT", help = "Project description")]
    pub description: Option<String>,

    #[arg(
        long = "project-name",
        value_name = "NAME",
        help = "Human-readable project name (default: derived from the package)"
    )]
    pub project_name: Option<String>,
}

/// Arguments for `simple` and `advanced`.
#[derive(Debug, Args)]
pub struct AddonArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Generate as a suite module in this sub-folder.
    #[arg(
        long = "folder",
        value_name = "DIR",
        help = "Suite sub-folder; generates the nested variant"
    )]
    pub folder: Option<String>,
}

#[derive(Debug, Args)]
pub struct SuiteArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Debug, Args)]
pub struct I18nArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Locale in `language_COUNTRY` form.
    #[arg(long = "locale", value_name = "LOCALE", help = "Locale, e.g. fr_FR")]
    pub locale: String,

    #[arg(
        long = "message-bundle",
        value_name = "FILE",
        help = "Translated messages.properties file"
    )]
    pub message_bundle: PathBuf,

    #[arg(
        long = "flag-graphic",
        value_name = "FILE",
        help = "Flag icon (default: extracted from the configured icon set)"
    )]
    pub flag_graphic: Option<PathBuf>,

    #[arg(
        long = "language",
        value_name = "NAME",
        help = "Language name (default: derived from the locale's country)"
    )]
    pub language: Option<String>,
}

#[derive(Debug, Args)]
pub struct WrapperArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[arg(long = "group-id", value_name = "ID", help = "Wrapped library groupId")]
    pub group_id: String,

    #[arg(long = "artifact-id", value_name = "ID", help = "Wrapped library artifactId")]
    pub artifact_id: String,

    #[arg(
        long = "library-version",
        value_name = "VERSION",
        help = "Wrapped library version"
    )]
    pub library_version: String,

    #[arg(long = "vendor-name", value_name = "NAME", help = "Library vendor")]
    pub vendor_name: String,

    #[arg(long = "license-url", value_name = "URL", help = "Library license URL")]
    pub license_url: String,

    #[arg(long = "doc-url", value_name = "URL", help = "Library documentation URL")]
    pub doc_url: Option<String>,

    #[arg(
        long = "osgi-imports",
        value_name = "IMPORTS",
        help = "Extra OSGi Import-Package entries"
    )]
    pub osgi_imports: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path of the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
