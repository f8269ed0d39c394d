//! Comprehensive error handling for the Bakery CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use bakery_core::error::BakeryError;

// Re-export so callers only need `use crate::error::*`.
pub use bakery_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A malformed `app[:Model,...]` token on the command line.
    #[error("Invalid target '{token}': {reason}")]
    InvalidTarget { token: String, reason: String },

    /// The named app does not exist in the schema manifest.
    #[error("App '{app}' is not in the schema manifest")]
    UnknownApp {
        app: String,
        available: Vec<String>,
    },

    /// A selected model does not exist in its app.
    #[error("Model '{model}' is not in app '{app}'")]
    UnknownModel {
        app: String,
        model: String,
        available: Vec<String>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `bakery-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("Baking failed: {0}")]
    Core(#[from] BakeryError),

    /// The run completed but some artifacts could not be written.
    #[error("{count} artifact(s) failed; see the report above")]
    ArtifactFailures { count: usize },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
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
            Self::InvalidTarget { token, .. } => vec![
                format!("'{}' is not a valid target", token),
                "Targets look like: app or app:Model1,Model2".into(),
                "Example: bakery bake bread:Sesame,Pumpernickel donut:Glazed".into(),
            ],

            Self::UnknownApp { app, available } => {
                let mut suggestions = vec![
                    format!("'{}' was not found in the schema manifest", app),
                    "Apps defined in the manifest:".into(),
                ];
                for name in available {
                    suggestions.push(format!("  \u{2022} {name}"));
                }
                suggestions.push("Check --schema points at the right manifest".into());
                suggestions
            }

            Self::UnknownModel {
                app,
                model,
                available,
            } => {
                let mut suggestions = vec![
                    format!("App '{}' has no model named '{}'", app, model),
                    format!("Models defined for '{}':", app),
                ];
                for name in available {
                    suggestions.push(format!("  \u{2022} {name}"));
                }
                suggestions
            }

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file with 'bakery config path'".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::ArtifactFailures { count } => vec![
                format!("{} artifact(s) could not be written", count),
                "Check file permissions and disk space, then re-run".into(),
                "Already-baked artifacts are skipped; re-running is safe".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTarget { .. } => ErrorCategory::UserError,
            Self::UnknownApp { .. } | Self::UnknownModel { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ArtifactFailures { .. } => ErrorCategory::Internal,
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

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    /// Build the user-facing error block: message, cause chain when verbose,
    /// suggestions, and a hint to re-run with `-v` otherwise.
    fn render(&self, verbose: bool, colored: bool) -> String {
        let mut out = String::new();

        if colored {
            let _ = write!(out, "\n{} ", "\u{2717} Error:".red().bold());
            let _ = writeln!(out, "{}", self.to_string().red());
        } else {
            let _ = writeln!(out, "\nError: {self}");
        }

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                if colored {
                    let _ = writeln!(out, "  {} {}", "\u{2192}".dimmed(), err.to_string().dimmed());
                } else {
                    let _ = writeln!(out, "  Caused by: {err}");
                }
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            if colored {
                let _ = write!(out, "\n{}\n", "Suggestions:".yellow().bold());
            } else {
                out.push_str("\nSuggestions:\n");
            }
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn invalid_target_suggestions_show_syntax() {
        let err = CliError::InvalidTarget {
            token: "bread::".into(),
            reason: "too many ':' separators".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("app:Model1,Model2")));
    }

    #[test]
    fn unknown_app_lists_available() {
        let err = CliError::UnknownApp {
            app: "cakes".into(),
            available: vec!["pastries".into(), "bread".into()],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("pastries")));
        assert!(suggestions.iter().any(|s| s.contains("bread")));
    }

    #[test]
    fn unknown_model_lists_available() {
        let err = CliError::UnknownModel {
            app: "pastries".into(),
            model: "Cake".into(),
            available: vec!["Tart".into(), "Danish".into()],
        };
        assert!(err.suggestions().iter().any(|s| s.contains("Tart")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        let err = CliError::InvalidTarget {
            token: "x:".into(),
            reason: "empty model list".into(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::UnknownApp {
            app: "x".into(),
            available: vec![],
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn core_configuration_error_maps_to_configuration() {
        let err = CliError::Core(BakeryError::Configuration {
            message: "bad manifest".into(),
        });
        assert_eq!(err.exit_code(), 4);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let err = CliError::UnknownApp {
            app: "cakes".into(),
            available: vec!["pastries".into()],
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::ArtifactFailures { count: 1 };
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
