//! CLI-level errors: wraps [`CreatorError`] and the failures that only the
//! host can hit (arguments, configuration, reading supplied files), and maps
//! each one onto a process exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use creator_core::error::CreatorError;

pub use creator_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration file could not be read, parsed, or rendered.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `creator-core`.
    #[error("Generation failed: {0}")]
    Core(#[from] CreatorError),

    /// A local I/O operation failed (reading a supplied asset, writing output).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                format!(
                    "Environment overrides use the {}__ prefix",
                    crate::config::ENV_PREFIX
                ),
            ],

            Self::Core(core_err) => {
                let mut suggestions = core_err.suggestions();
                if core_err.is_retryable() {
                    suggestions.push("This may be transient; try the command again".into());
                }
                suggestions
            }

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that the file exists and is readable".into(),
                "Check permissions on the output directory".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorCategory::NotFound
            }
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render for a terminal that understands ANSI colors.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Render without escape codes, for pipes and log capture.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, f: fn(&str) -> String| {
            if color { f(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("\u{2717} Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out += &format!(
                    "  {}\n",
                    paint(&format!("Caused by: {err}"), |t| t.dimmed().to_string())
                );
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out += &format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            );
            for hint in &suggestions {
                out += &format!("  - {hint}\n");
            }
        }

        if !verbose {
            out += &format!(
                "\n{}\n",
                paint("Re-run with --verbose to see the cause chain.", |t| t
                    .dimmed()
                    .to_string())
            );
        }
        out
    }

    /// Record the failure in the log at a level matching its category.
    pub fn log(&self) {
        let cause = self.source().map(|e| e.to_string());
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(category = ?self.category(), cause = cause.as_deref(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(category = ?self.category(), cause = cause.as_deref(), "{self}")
            }
        }
    }
}

/// Coarse grouping that drives the exit code and log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Convert foreign error types into [`CliError`] at call-sites with a
/// descriptive context message.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, CreatorError> {
    /// Core errors already carry their own context.
    fn with_cli_context<F, S>(self, _f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creator_core::application::ApplicationError;
    use creator_core::domain::DomainError;
    use std::io;
    use std::path::PathBuf;

    fn core(err: impl Into<CreatorError>) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn invalid_package_is_a_user_error() {
        let err = core(DomainError::InvalidPackage {
            package: "1com".into(),
            reason: "segment starts with a digit".into(),
        });
        assert_eq!(err.exit_code(), 2);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn existing_project_is_a_user_error() {
        let err = core(ApplicationError::ProjectExists {
            path: PathBuf::from("/tmp/x"),
        });
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn missing_template_is_not_found() {
        let err = core(ApplicationError::TemplateNotFound {
            name: "simple/pom.xml".into(),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn failed_download_suggests_retrying() {
        let err = core(ApplicationError::FetchFailed {
            url: "http://example.invalid/flags.zip".into(),
            reason: "timed out".into(),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("try the command again")));
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn unreadable_asset_is_not_found() {
        let err: CliResult<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
            .with_cli_context(|| "reading messages_fr.properties");
        let err = err.unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("messages_fr.properties"));
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::InvalidInput {
            message: "empty package".into(),
            source: None,
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "reading flag".into(),
            source: io::Error::other("disk on fire"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk on fire"));
        assert!(!s.contains("--verbose"));
    }
}
