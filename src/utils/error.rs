use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Failed to launch IDE: {message}")]
    Launch { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SwitchError>;

impl SwitchError {
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn launch_error(message: impl Into<String>) -> Self {
        Self::Launch {
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn directory_not_found(path: impl Into<String>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }
}

impl From<&str> for SwitchError {
    fn from(message: &str) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }
}

impl From<String> for SwitchError {
    fn from(message: String) -> Self {
        Self::Config { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation_helpers() {
        let launch_err = SwitchError::launch_error("spawn failed");
        assert!(matches!(launch_err, SwitchError::Launch { .. }));
        assert_eq!(launch_err.to_string(), "Failed to launch IDE: spawn failed");

        let config_err = SwitchError::config_error("invalid configuration");
        assert!(matches!(config_err, SwitchError::Config { .. }));
        assert_eq!(
            config_err.to_string(),
            "Configuration error: invalid configuration"
        );

        let missing = SwitchError::file_not_found("/tmp/gone.py");
        assert_eq!(missing.to_string(), "File not found: /tmp/gone.py");
    }

    #[test]
    fn test_error_conversion() {
        let string_err: SwitchError = "test error".into();
        assert!(matches!(string_err, SwitchError::Config { .. }));

        let owned_string_err: SwitchError = String::from("test error").into();
        assert!(matches!(owned_string_err, SwitchError::Config { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let switch_err: SwitchError = io_err.into();
        assert!(matches!(switch_err, SwitchError::Io(_)));
    }
}
