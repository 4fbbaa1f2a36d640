//! Output management and formatting.
//!
//! [`OutputManager`] is the console side of the core [`ProgressReporter`]
//! port: the services call it for the header, one `-- <path>` line per
//! materialized entry, status messages and the instructions block.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use construct_core::application::ports::ProgressReporter;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is also disabled when stdout is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Printed regardless of `--quiet`; used for command results the user
    /// asked for explicitly (config values, instructions).
    pub fn always(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One progress line per materialized path.
    pub fn created(&self, path: &Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("-- {}", path.display())
        } else {
            format!("{} {}", "--".dimmed(), path.display())
        };
        self.term.write_line(&line)
    }

    /// Body framed by two delimiter lines. Never suppressed.
    pub fn block(&self, delimiter: &str, body: &str) -> io::Result<()> {
        self.term.write_line(delimiter)?;
        self.term.write_line(body.trim_end_matches('\n'))?;
        self.term.write_line(delimiter)
    }

    /// Spinner on stderr while a slow step runs; `None` when quiet or when
    /// stderr is not a terminal.
    pub fn spinner(&self, msg: impl Into<String>) -> Option<ProgressBar> {
        if self.quiet || !io::stderr().is_terminal() {
            return None;
        }
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new_spinner().with_style(style).with_message(msg.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Some(bar)
    }
}

/// Write failures on the console are logged, not propagated: the files
/// have already been written by the time a progress line fails.
impl ProgressReporter for OutputManager {
    fn header(&self, text: &str) {
        if let Err(e) = OutputManager::header(self, text) {
            tracing::warn!(error = %e, "Failed to write header");
        }
    }

    fn created(&self, path: &Path) {
        if let Err(e) = OutputManager::created(self, path) {
            tracing::warn!(error = %e, path = %path.display(), "Failed to write progress line");
        }
    }

    fn message(&self, text: &str) {
        if let Err(e) = self.print(text) {
            tracing::warn!(error = %e, "Failed to write message");
        }
    }

    fn block(&self, delimiter: &str, body: &str) {
        if let Err(e) = OutputManager::block(self, delimiter, body) {
            tracing::warn!(error = %e, "Failed to write instructions");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
