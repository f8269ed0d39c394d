//! Global arguments available on every subcommand.
//!
//! Flattened into [`super::Cli`], so `bakery bake -v pastries` and
//! `bakery -v bake pastries` mean the same thing.

use clap::Args;
use std::path::PathBuf;

/// Flags shared by all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Logging verbosity, counted: `-v` info, `-vv` debug, `-vvv` trace.
    /// Without it only warnings and errors are logged.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress everything except failed artifacts and errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes. Also honoured via the `NO_COLOR`
    /// environment variable (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file to load instead of the default location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How to render the bake report.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Report rendering formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Colored, human-readable report.
    Human,
    /// Plain text without colors.
    Plain,
    /// The `GenerationReport` as pretty-printed JSON.
    Json,
}
