use crate::utils::{Result, SwitchError};
use std::env;
use std::path::{Path, PathBuf};

pub fn ensure_absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(current) => current.join(path),
            Err(_) => PathBuf::from("/").join(path),
        }
    }
}

pub fn ensure_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SwitchError::file_not_found(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(SwitchError::invalid_args(format!(
            "Path is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SwitchError::directory_not_found(
            path.display().to_string(),
        ));
    }
    if !path.is_dir() {
        return Err(SwitchError::invalid_args(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Lowercase extension of a path, if it has one.
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_absolute_path() {
        let relative = Path::new("test/path");
        let absolute = ensure_absolute_path(relative);
        assert!(absolute.is_absolute());

        let already_absolute = Path::new("/absolute/path");
        let result = ensure_absolute_path(already_absolute);
        assert_eq!(result, already_absolute);
    }

    #[test]
    fn test_ensure_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("main.py");
        fs::write(&file, "print()").unwrap();

        assert!(ensure_file_exists(&file).is_ok());
        assert!(ensure_file_exists(&temp_dir.path().join("missing.py")).is_err());
        assert!(ensure_file_exists(temp_dir.path()).is_err());
    }

    #[test]
    fn test_ensure_dir_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("pom.xml");
        fs::write(&file, "<project/>").unwrap();

        assert!(ensure_dir_exists(temp_dir.path()).is_ok());
        assert!(ensure_dir_exists(&temp_dir.path().join("missing")).is_err());
        assert!(ensure_dir_exists(&file).is_err());
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(
            file_extension(Path::new("/src/Main.JAVA")),
            Some("java".to_string())
        );
        assert_eq!(
            file_extension(Path::new("app.py")),
            Some("py".to_string())
        );
        assert_eq!(file_extension(Path::new("Makefile")), None);
    }
}
