//! Implementation of the `bakery config` command.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key).ok_or_else(|| CliError::ConfigError {
                message: format!("unknown configuration key '{key}'"),
                source: None,
            })?;
            output.print(&value)?;
        }
        ConfigCommands::List => {
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("cannot render configuration: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&rendered)?;
        }
        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }
    Ok(())
}

/// Resolve a dotted key path against the config.
fn lookup(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "defaults.schema" => Some(config.defaults.schema.display().to_string()),
        "defaults.root" => Some(config.defaults.root.display().to_string()),
        "defaults.overrides_dir" => Some(config.defaults.overrides_dir.display().to_string()),
        "output.no_color" => Some(config.output.no_color.to_string()),
        _ => None,
    }
}
