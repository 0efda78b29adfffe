//! `sprout config`: inspect configuration values.

use std::collections::BTreeMap;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.format() == OutputFormat::Json {
                let entry = BTreeMap::from([(key.as_str(), value.as_str())]);
                output.json("config value", &entry)?;
            } else {
                output.print(&format!("{key} = {value:?}"))?;
            }
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                return output.json("config", &config);
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let path = |p: &Option<std::path::PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };
    match key {
        "defaults.language" => Ok(config.defaults.language.clone().unwrap_or_default()),
        "defaults.build_system" => Ok(config.defaults.build_system.clone().unwrap_or_default()),
        "defaults.application_name" => {
            Ok(config.defaults.application_name.clone().unwrap_or_default())
        }
        "defaults.package" => Ok(config.defaults.package.clone().unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "generation.on_copy_error" => Ok(config.generation.on_copy_error.to_string()),
        "generation.catalog" => Ok(path(&config.generation.catalog)),
        "generation.resources_dir" => Ok(path(&config.generation.resources_dir)),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
