//! YAML configuration file
//!
//! Every field is optional; missing fields keep their built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{
    Result,
    config::{not_found, parse_failed, read_failed},
};

/// File name looked up under the user's config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Poll timing as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PollConfig {
    pub interval_ms: u64,
    pub timeout_secs: u64,
    pub backoff: f64,
    pub max_interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            timeout_secs: 300,
            backoff: 1.0,
            max_interval_ms: 5000,
        }
    }
}

/// Contents of `config.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub poll: PollConfig,
    pub settle_delay_secs: u64,
    pub all_users: bool,
    pub install_root: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub export: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            poll: PollConfig::default(),
            settle_delay_secs: 5,
            all_users: false,
            install_root: None,
            output_dir: None,
            export: true,
        }
    }
}

impl FileConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?
        };
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load the configuration in effect.
    ///
    /// An explicit path must exist. Without one, the per-user file is used
    /// when present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        match default_path() {
            Some(path) if path.is_file() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/winstore-repair/config.yaml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("winstore-repair").join(CONFIG_FILE_NAME))
}
