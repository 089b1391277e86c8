//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use creator_core::application::{GenerationReport, SuiteReport};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto becomes Human on a TTY and Plain when piped.
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet and JSON mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON on stdout. Written even in quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Spinner on stderr while a generation runs; hidden when there is no
    /// human watching.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.is_silent() || self.resolved_format != OutputFormat::Human {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(msg.to_owned());
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    }

    // ── Reports ───────────────────────────────────────────────────────────

    /// Render the outcome of a single-module generation.
    pub fn report(&self, report: &GenerationReport, root: &Path) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(report);
        }
        self.success(&format!(
            "{} addon '{}' created in {}",
            report.archetype,
            report.artifact_id,
            root.display()
        ))?;
        self.file_list(&report.written, &report.skipped)
    }

    /// Render the outcome of a suite generation.
    pub fn suite_report(&self, report: &SuiteReport, root: &Path) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(report);
        }
        for module in &report.modules {
            self.print(&format!(
                "  {:<40} {:>3} files",
                module.artifact_id,
                module.file_count()
            ))?;
        }
        self.file_list(&report.root_files, &report.root_skipped)?;
        for pom in &report.patched {
            self.print(&format!("  patched   {}", pom.display()))?;
        }
        self.print(&format!("  manifest  {}", report.manifest.display()))?;
        self.success(&format!(
            "Suite created in {} ({} files)",
            root.display(),
            report.file_count()
        ))
    }

    fn file_list(&self, written: &[impl AsRef<Path>], skipped: &[impl AsRef<Path>]) -> io::Result<()> {
        for path in written {
            self.print(&format!("  created   {}", path.as_ref().display()))?;
        }
        for path in skipped {
            self.print(&format!("  kept      {}", path.as_ref().display()))?;
        }
        if !skipped.is_empty() {
            self.warning(&format!(
                "{} existing file(s) left untouched",
                skipped.len()
            ))?;
        }
        Ok(())
    }

    fn is_silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
