//! Application configuration loaded from YAML.
//!
//! ```yaml
//! greeting: Hello world!
//! storage:
//!   path: ~/.local/state/theme-toggle.json
//! theme:
//!   attribute: class
//!   storage_key: theme
//!   enable_system: true
//! ```
//!
//! Every section is optional; missing values take their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::components::DEFAULT_GREETING;
use crate::error::{Error, Result};
use crate::theme::ThemeConfig;

/// File the CLI persists the preference into when none is configured.
pub const DEFAULT_STORAGE_PATH: &str = "theme-toggle.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub greeting: String,
    pub storage: StorageConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            storage: StorageConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads and parses a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Where the preference is persisted.
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH))
    }
}
