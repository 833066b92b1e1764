use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::{self, ConfigManager};
use crate::utils::{Result, SwitchError};
use std::process::Command;

pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        Some(ConfigCommands::Setup) => execute_setup(),
        Some(ConfigCommands::Auto) => execute_auto(),
        Some(ConfigCommands::Show) => execute_show(),
        Some(ConfigCommands::Edit) => execute_edit(),
        Some(ConfigCommands::Reset) => execute_reset(),
        Some(ConfigCommands::Path) => execute_path(),
        None => execute_setup(),
    }
}

fn execute_setup() -> Result<()> {
    config::run_config_wizard()
        .map_err(|e| SwitchError::config_error(format!("Configuration wizard failed: {}", e)))?;
    Ok(())
}

fn execute_auto() -> Result<()> {
    config::run_quick_setup()
        .map_err(|e| SwitchError::config_error(format!("Auto-configuration failed: {}", e)))?;
    println!("✅ Auto-configuration completed successfully");
    Ok(())
}

fn execute_show() -> Result<()> {
    match ConfigManager::load_or_create() {
        Ok(config) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Err(e) => Err(SwitchError::config_error(format!(
            "Failed to load configuration: {}",
            e
        ))),
    }
}

fn execute_edit() -> Result<()> {
    let config_path = ConfigManager::get_config_path()
        .map_err(|e| SwitchError::config_error(format!("Failed to get config path: {}", e)))?;

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    let status = Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| SwitchError::config_error(format!("Failed to launch editor: {}", e)))?;

    if !status.success() {
        return Err(SwitchError::config_error(format!(
            "Editor exited with non-zero status: {}",
            status.code().unwrap_or(-1)
        )));
    }

    Ok(())
}

fn execute_reset() -> Result<()> {
    use dialoguer::{theme::ColorfulTheme, Confirm};

    if !Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Reset configuration to defaults? This cannot be undone.")
        .default(false)
        .interact()
        .map_err(|e| SwitchError::config_error(format!("Failed to read input: {}", e)))?
    {
        println!("❌ Configuration reset cancelled");
        return Ok(());
    }

    let default_config = config::defaults::default_config();
    ConfigManager::save(&default_config).map_err(|e| {
        SwitchError::config_error(format!("Failed to save default configuration: {}", e))
    })?;

    println!("✅ Configuration reset to defaults");
    Ok(())
}

fn execute_path() -> Result<()> {
    let config_path = ConfigManager::get_config_path()
        .map_err(|e| SwitchError::config_error(format!("Failed to get config path: {}", e)))?;
    println!("{}", config_path);
    Ok(())
}
