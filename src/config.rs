use crate::domain::DEFAULT_INCLUDE_BRANCH_PATTERN;
use crate::error::{DocVersionsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "docversions.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".docversions.toml";

/// Default name of the unreleased develop branch.
pub const DEFAULT_DEVELOP_BRANCH: &str = "master";

/// Represents the complete configuration for doc-versions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub versions: VersionsConfig,
}

fn default_include_branch_pattern() -> String {
    DEFAULT_INCLUDE_BRANCH_PATTERN.to_string()
}

fn default_develop_branch() -> String {
    DEFAULT_DEVELOP_BRANCH.to_string()
}

/// Settings consumed when the version catalog is built.
///
/// `include_branch_pattern` must contain a named group `version` capturing
/// `MAJOR.MINOR`; `develop_branch` names the unreleased line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionsConfig {
    #[serde(default = "default_include_branch_pattern")]
    pub include_branch_pattern: String,

    #[serde(default = "default_develop_branch")]
    pub develop_branch: String,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        VersionsConfig {
            include_branch_pattern: default_include_branch_pattern(),
            develop_branch: default_develop_branch(),
        }
    }
}

impl VersionsConfig {
    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        include_branch_pattern: Option<String>,
        develop_branch: Option<String>,
    ) -> Self {
        if let Some(pattern) = include_branch_pattern {
            self.include_branch_pattern = pattern;
        }
        if let Some(branch) = develop_branch {
            self.develop_branch = branch;
        }
        self
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docversions.toml` in current directory
/// 3. `.docversions.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(),
    };

    match path {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

fn load_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)?;
    toml::from_str(&config_str).map_err(|e| {
        DocVersionsError::config(format!("Cannot parse '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.versions.include_branch_pattern,
            r"(?P<version>\d+.\d+).X"
        );
        assert_eq!(config.versions.develop_branch, "master");
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config: Config = toml::from_str("[versions]\ndevelop_branch = \"develop\"\n").unwrap();
        assert_eq!(config.versions.develop_branch, "develop");
        assert_eq!(
            config.versions.include_branch_pattern,
            DEFAULT_INCLUDE_BRANCH_PATTERN
        );
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let versions = VersionsConfig::default()
            .with_overrides(Some(r"v(?P<version>\d+\.\d+)".to_string()), None);
        assert_eq!(versions.include_branch_pattern, r"v(?P<version>\d+\.\d+)");
        assert_eq!(versions.develop_branch, "master");

        let versions = versions.with_overrides(None, Some("trunk".to_string()));
        assert_eq!(versions.develop_branch, "trunk");
    }
}
