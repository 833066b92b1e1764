pub mod completion;
pub mod config;
pub mod file;
pub mod project;

use crate::utils::{ensure_absolute_path, ensure_dir_exists, Result, SwitchError};
use std::env;
use std::path::PathBuf;

/// Workspace root for classification: an explicit directory if given,
/// otherwise the directory the command runs from.
pub(crate) fn resolve_workspace_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => {
            let dir = ensure_absolute_path(&dir);
            ensure_dir_exists(&dir)?;
            Ok(dir)
        }
        None => env::current_dir().map_err(|e| {
            SwitchError::invalid_args(format!("Failed to determine current directory: {}", e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_root_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        assert!(resolve_workspace_root(Some(temp_dir.path().to_path_buf())).is_ok());
        assert!(resolve_workspace_root(Some(temp_dir.path().join("missing"))).is_err());
    }

    #[test]
    fn test_default_root_is_current_directory() {
        let root = resolve_workspace_root(None).unwrap();
        assert!(root.is_absolute());
    }
}
