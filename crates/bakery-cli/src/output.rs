//! Output management and formatting.
//!
//! Every user-facing line of a bake run goes through [`OutputManager`]: the
//! per-artifact report lines (baked / skipped / reclaimed / failed), the
//! per-app summaries, and the JSON report body. Centralizing the writes here
//! keeps quiet-mode and color handling in one place instead of scattered
//! across command handlers.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{AnsiColors, OwoColorize};

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
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
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
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// One status line: icon, message, one color for both.
    fn status(&self, icon: &str, color: AnsiColors, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("{icon} {msg}")
        } else {
            format!("{} {}", icon.color(color).bold(), msg.color(color))
        };
        self.term.write_line(&line)
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Unstyled message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>` — a generated artifact or completed step.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status("\u{2713}", AnsiColors::Green, msg)
    }

    /// `✗ <msg>` — a failed artifact. *Not* suppressed in quiet mode;
    /// failures must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2717}", AnsiColors::Red, msg)
    }

    /// `⚠ <msg>` — a condition that needs manual attention.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status("\u{26a0}", AnsiColors::Yellow, msg)
    }

    /// `ℹ <msg>` — skips, reclaims, and other informational lines.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status("\u{2139}", AnsiColors::Blue, msg)
    }

    /// Bold cyan header, used for the per-app sections of the report.
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

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
