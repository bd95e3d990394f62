use crate::error::{ChangelogError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Project-level configuration file name
pub const CONFIG_FILE_NAME: &str = "changelog.toml";

/// Environment variable that overrides the git root when no path is configured
pub const GIT_ROOT_ENV: &str = "GIT_CHANGELOG_ROOT";

/// Represents the complete configuration for git-changelog.
///
/// Every key is optional in the file; missing keys fall back to their defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Pattern a tag must match to mark a release
    #[serde(default = "default_regex_for_sem_ver_tag")]
    pub regex_for_sem_ver_tag: String,

    /// Template file replacing the built-in changelog layout
    #[serde(default)]
    pub json_change_log_format_file_path: Option<PathBuf>,

    /// Repository root; discovered from the current directory when unset
    #[serde(default)]
    pub git_file_path: Option<PathBuf>,

    /// Branch whose history is walked; `HEAD` when unset
    #[serde(default)]
    pub main_branch: Option<String>,

    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

/// Returns the default release tag pattern (`vMAJOR.MINOR.PATCH`).
fn default_regex_for_sem_ver_tag() -> String {
    crate::domain::TagPattern::DEFAULT.to_string()
}

/// Returns the default output location under the build directory.
fn default_output_file() -> PathBuf {
    Path::new("build").join("CHANGELOG.md")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            regex_for_sem_ver_tag: default_regex_for_sem_ver_tag(),
            json_change_log_format_file_path: None,
            git_file_path: None,
            main_branch: None,
            output_file: default_output_file(),
        }
    }
}

impl Config {
    /// Directory to open the repository from.
    ///
    /// The `GIT_CHANGELOG_ROOT` environment variable wins over `git_file_path`,
    /// and the current directory is used when neither is set.
    pub fn git_root(&self) -> PathBuf {
        match env::var(GIT_ROOT_ENV) {
            Ok(root) if !root.trim().is_empty() => PathBuf::from(root),
            _ => self
                .git_file_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `.changelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_config.exists() {
            user_config
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ChangelogError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| ChangelogError::config(format!("Invalid '{}': {}", path.display(), e)))
}
