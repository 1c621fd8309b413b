use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReltagError, Result};
use crate::git::DEFAULT_GIT;
use crate::pipeline::context::{DEFAULT_COMMIT, DEFAULT_TAG_PREFIX};

/// File looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "reltag.toml";

/// Configuration for git-reltag.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Version-control program to run
    pub git: String,
    /// Commit to tag
    pub commit: String,
    /// Prefix in front of the version in tag names
    pub tag_prefix: String,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            git: DEFAULT_GIT.to_string(),
            commit: DEFAULT_COMMIT.to_string(),
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            dry_run: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ReltagError::config(e.to_string()))
    }
}

/// Per-user configuration file, `<config dir>/git-reltag/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("git-reltag").join("config.toml"))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `reltag.toml` in current directory
/// 3. `git-reltag/config.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        match user_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        }
    };

    let text = fs::read_to_string(&path).map_err(|e| {
        ReltagError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    Config::from_toml(&text).map_err(|e| match e {
        ReltagError::Config(msg) => ReltagError::config(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}
