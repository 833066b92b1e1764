use super::defaults::{default_config, detect_installed_ides};
use super::{Config, ConfigError, ConfigManager, IdeOverrides, Result};
use crate::core::resolver::IdeFamily;
use crate::platform::{home_dir, Platform};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

pub fn run_config_wizard() -> Result<Config> {
    println!("🔧 jbswitch Configuration Wizard");
    println!("Leave any prompt empty to keep platform discovery for that IDE.\n");

    let mut config = default_config();
    config.ide = configure_overrides(config.ide)?;

    println!("\n📋 Configuration Summary:");
    display_summary(&config);

    if Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Save this configuration?")
        .default(true)
        .interact()
        .map_err(|e| ConfigError::ValidationError(format!("Failed to read input: {}", e)))?
    {
        ConfigManager::save(&config)?;
        println!("✅ Configuration saved successfully!");
    } else {
        println!("❌ Configuration not saved.");
        return Err(ConfigError::ValidationError(
            "Configuration cancelled by user".to_string(),
        ));
    }

    Ok(config)
}

/// Non-interactive setup: write whatever installs can be discovered.
pub fn run_quick_setup() -> Result<Config> {
    let detected = detect_installed_ides(Platform::current(), &home_dir());

    if detected.is_empty() {
        return Err(ConfigError::ValidationError(
            "No JetBrains IDE found; run 'jbswitch config setup' to configure paths manually"
                .to_string(),
        ));
    }

    let mut config = default_config();
    for (family, path) in detected {
        println!("  • {} found at {}", family.display_name(), path);
        match family {
            IdeFamily::IntelliJ => config.ide.idea_path = Some(path),
            IdeFamily::PyCharm => config.ide.pycharm_path = Some(path),
        }
    }

    ConfigManager::save(&config)?;
    Ok(config)
}

fn configure_overrides(current: IdeOverrides) -> Result<IdeOverrides> {
    let idea_path = prompt_optional_path("IntelliJ IDEA path or command", &current.idea_path)?;
    let pycharm_path = prompt_optional_path("PyCharm path or command", &current.pycharm_path)?;
    let eap_idea_path =
        prompt_optional_path("IntelliJ IDEA EAP path (pre-release build)", &current.eap_idea_path)?;

    let use_idea_eap = if eap_idea_path.is_some() {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Prefer the EAP build for Java projects?")
            .default(false)
            .interact()
            .map_err(|e| ConfigError::ValidationError(format!("Failed to read input: {}", e)))?
    } else {
        false
    };

    Ok(IdeOverrides {
        idea_path,
        pycharm_path,
        eap_idea_path,
        use_idea_eap,
    })
}

fn prompt_optional_path(prompt: &str, current: &Option<String>) -> Result<Option<String>> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .default(current.clone().unwrap_or_default())
        .interact()
        .map_err(|e| ConfigError::ValidationError(format!("Failed to read input: {}", e)))?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn display_summary(config: &Config) {
    let display = |value: &Option<String>| {
        value.clone().unwrap_or_else(|| "(platform discovery)".to_string())
    };
    println!("  IntelliJ IDEA: {}", display(&config.ide.idea_path));
    println!("  PyCharm:       {}", display(&config.ide.pycharm_path));
    println!("  IDEA EAP:      {}", display(&config.ide.eap_idea_path));
    println!(
        "  Use EAP for Java: {}",
        if config.ide.use_idea_eap { "yes" } else { "no" }
    );
}
