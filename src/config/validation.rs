use super::{Config, ConfigError, Result};

pub fn validate_config(config: &Config) -> Result<()> {
    validate_override_path("idea_path", &config.ide.idea_path)?;
    validate_override_path("pycharm_path", &config.ide.pycharm_path)?;
    validate_override_path("eap_idea_path", &config.ide.eap_idea_path)?;
    Ok(())
}

fn validate_override_path(key: &str, value: &Option<String>) -> Result<()> {
    if let Some(path) = value {
        if path.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "'{}' cannot be an empty string; remove the key to unset it",
                key
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdeOverrides;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_set_paths_are_valid() {
        let config = Config {
            ide: IdeOverrides {
                idea_path: Some("/opt/idea".to_string()),
                pycharm_path: Some("pycharm".to_string()),
                eap_idea_path: None,
                use_idea_eap: false,
            },
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_override_is_rejected() {
        let config = Config {
            ide: IdeOverrides {
                idea_path: Some("  ".to_string()),
                ..IdeOverrides::default()
            },
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_eap_flag_without_path_is_allowed() {
        let config = Config {
            ide: IdeOverrides {
                use_idea_eap: true,
                ..IdeOverrides::default()
            },
        };
        assert!(validate_config(&config).is_ok());
    }
}
