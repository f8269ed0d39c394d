//! Command handlers, one module per subcommand.

pub mod bake;
pub mod completions;
pub mod config;
