//! Configuration loaded from `config.toml`.

use crate::calculator::DisplayConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Application configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How results and errors are shown.
    pub display: DisplayConfig,
    /// Input buffer limits.
    pub input: InputConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum number of characters the input buffer accepts.
    pub max_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { max_length: 256 }
    }
}

impl Config {
    /// Default config location, `$XDG_CONFIG_HOME/scicalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scicalc").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) if path.exists() => path,
            other => {
                debug!(path = ?other, "no config file, using defaults");
                return Ok(Self::default());
            }
        };

        info!("Loading config from: {}", path.display());
        Self::from_file(&path)
    }

    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.max_length == 0 {
            anyhow::bail!("input.max_length must be > 0");
        }
        if self.display.error_text.is_empty() {
            anyhow::bail!("display.error_text must not be empty");
        }
        Ok(())
    }
}
