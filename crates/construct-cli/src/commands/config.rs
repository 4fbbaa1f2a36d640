//! `construct config` - inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.always(&get_config_value(&config, &global, &key)?)?;
        }

        ConfigCommands::List => {
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.always(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.always(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Effective value of `key`: flags win over the loaded configuration.
fn get_config_value(config: &AppConfig, global: &GlobalArgs, key: &str) -> CliResult<String> {
    let settings = config.resolve(global);
    let path = |p: Option<PathBuf>| p.map(|p| p.display().to_string()).unwrap_or_default();

    match key {
        "template.reference" => Ok(settings
            .template
            .map(|t| t.to_string())
            .unwrap_or_default()),
        "template.branch" => Ok(settings.branch.unwrap_or_default()),
        "template.cache_dir" => Ok(settings.cache_dir.display().to_string()),
        "project.import_prefix" => Ok(settings.import_prefix),
        "project.source_path" => Ok(path(settings.source_path)),
        "output.no_color" => Ok((config.output.no_color || global.no_color).to_string()),
        "render.strict" => Ok(settings.strict.to_string()),
        "generate.rename_rules" => Ok(settings
            .rename_rules
            .map(|rules| {
                rules
                    .iter()
                    .map(|r| format!("{} -> {}", r.pattern, r.replacement))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
