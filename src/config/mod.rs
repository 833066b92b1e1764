use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod manager;
pub mod validation;
pub mod wizard;

pub use manager::ConfigManager;
pub use wizard::{run_config_wizard, run_quick_setup};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub ide: IdeOverrides,
}

/// User-provided launch targets. All optional; unset keys fall through to
/// platform discovery.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct IdeOverrides {
    pub idea_path: Option<String>,
    pub pycharm_path: Option<String>,
    pub eap_idea_path: Option<String>,
    pub use_idea_eap: bool,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::IoError(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::JsonError(error)
    }
}

impl Config {
    pub fn load_or_create() -> Result<Self> {
        ConfigManager::load_or_create()
    }

    pub fn save(&self) -> Result<()> {
        ConfigManager::save(self)
    }

    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}
