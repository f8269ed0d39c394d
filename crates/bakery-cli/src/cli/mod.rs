//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "bakery",
    bin_name = "bakery",
    version  = env!("CARGO_PKG_VERSION"),
    author   = "Bakery Contributors",
    about    = "\u{1f35e} Bake admin, views, urls, forms, and templates from model metadata",
    long_about = "Bakery reads a normalized schema manifest and generates the \
                  administrative configuration, routing, and page artifacts \
                  each model needs - without ever overwriting your edits.",
    after_help = "EXAMPLES:\n\
        \x20 bakery bake bread:Sesame,Pumpernickel donut:Glazed\n\
        \x20 bakery bake pastries --schema bakery.toml --root .\n\
        \x20 bakery bake pastries --dry-run -v\n\
        \x20 bakery completions bash > /usr/share/bash-completion/completions/bakery",
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

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bake artifacts for the selected apps and models.
    #[command(
        visible_alias = "b",
        about = "Bake artifacts for apps and models",
        after_help = "EXAMPLES:\n\
            \x20 bakery bake pastries                  # every model in the app\n\
            \x20 bakery bake pastries:Tart,Danish      # only the named models\n\
            \x20 bakery bake bread donut:Glazed        # several apps at once"
    )]
    Bake(BakeArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 bakery completions bash > ~/.local/share/bash-completion/completions/bakery\n\
            \x20 bakery completions zsh  > ~/.zfunc/_bakery\n\
            \x20 bakery completions fish > ~/.config/fish/completions/bakery.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Bakery configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 bakery config get defaults.schema\n\
            \x20 bakery config list\n\
            \x20 bakery config path"
    )]
    Config(ConfigCommands),
}

// ── bake ──────────────────────────────────────────────────────────────────────

/// Arguments for `bakery bake`.
#[derive(Debug, Args)]
pub struct BakeArgs {
    /// Apps to bake, each optionally restricted to named models.
    #[arg(
        value_name = "APP[:MODEL,...]",
        required = true,
        help = "App name, optionally followed by :Model1,Model2"
    )]
    pub targets: Vec<String>,

    /// Schema manifest describing apps, models, and fields.
    #[arg(
        short = 's',
        long = "schema",
        value_name = "FILE",
        help = "Schema manifest path (default: bakery.toml)"
    )]
    pub schema: Option<PathBuf>,

    /// Project root containing the app directories.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Directory of template overrides.
    #[arg(
        long = "overrides",
        value_name = "DIR",
        env = "BAKERY_OVERRIDES_DIR",
        help = "Template override directory (default: bakery_overrides)"
    )]
    pub overrides: Option<PathBuf>,

    /// Compute all decisions without writing or removing anything.
    #[arg(long = "dry-run", help = "Show what would be baked without baking")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `bakery completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `bakery config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.schema`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
