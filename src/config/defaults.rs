use super::Config;
use crate::core::resolver::{probe_install, IdeFamily};
use crate::platform::Platform;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub fn default_config() -> Config {
    Config::default()
}

pub fn get_config_file_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "jbswitch") {
        proj_dirs.config_dir().join("config.json")
    } else {
        PathBuf::from(".jbswitch").join("config.json")
    }
}

pub fn is_command_available(command: &str) -> bool {
    which::which(command).is_ok()
}

/// Discover installed JetBrains IDEs for `config auto`: install-directory
/// probing on macOS, then the launcher commands JetBrains puts on PATH.
pub fn detect_installed_ides(platform: Platform, home: &Path) -> Vec<(IdeFamily, String)> {
    let mut found = Vec::new();

    for family in [IdeFamily::IntelliJ, IdeFamily::PyCharm] {
        if platform == Platform::MacOS {
            if let Some(install) = probe_install(family, home) {
                found.push((family, install.to_string_lossy().into_owned()));
                continue;
            }
        }
        if is_command_available(family.command()) {
            found.push((family, family.command().to_string()));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_path_is_namespaced() {
        let path = get_config_file_path();
        assert!(path.to_string_lossy().contains("jbswitch"));
        assert!(path.ends_with("config.json"));
    }

    #[test]
    fn test_is_command_available() {
        assert!(is_command_available("sh"));
        assert!(!is_command_available("nonexistent-command-12345"));
    }

    #[test]
    fn test_detect_finds_mac_installs() {
        let home = TempDir::new().unwrap();
        let install = home.path().join("Applications").join("IDEA.app");
        fs::create_dir_all(&install).unwrap();

        let found = detect_installed_ides(Platform::MacOS, home.path());
        assert!(found
            .iter()
            .any(|(family, path)| *family == IdeFamily::IntelliJ
                && *path == install.to_string_lossy()));
    }
}
