//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns this file; the core crate only sees the
//! [`GeneratorConfig`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables, `ADDON_CREATOR__<SECTION>__<KEY>` (a `.env`
//!    file in the working directory is loaded first)
//! 2. Config file (`--config`, else the platform config directory)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use creator_core::config::{DEFAULT_ICON_SET_URL, GeneratorConfig};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ADDON_CREATOR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub i18n: I18nConfig,
    pub templates: TemplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Zip archive the flag icon is extracted from when none is supplied.
    pub iconset_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory whose files override the built-in templates.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            i18n: I18nConfig {
                iconset_url: DEFAULT_ICON_SET_URL.to_string(),
            },
            templates: TemplateConfig { local_path: None },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path().as_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Config::builder()
            .add_source(Config::try_from(&Self::default()).context("Invalid built-in defaults")?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.addon-creator.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "springroo", "addon-creator")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".addon-creator.toml"))
    }

    /// Settings handed to the generation service.
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig::default().with_icon_set_url(Some(&self.i18n.iconset_url))
    }

    /// Template override directory, if configured and present.
    pub fn template_dir(&self) -> Option<&Path> {
        self.templates
            .local_path
            .as_deref()
            .filter(|path| path.is_dir())
    }
}
