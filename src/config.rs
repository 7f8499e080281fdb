//! Configuration loading.
//!
//! Configuration lives in a single JSON file. A missing file is normal;
//! a broken one logs a warning and falls back to defaults so startup is
//! never blocked by a bad config.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file inside the config directory
pub const FILENAME: &str = "config.json";

/// Endpoint used when neither the command line nor the config file names one
pub fn default_endpoint() -> String {
    "http://localhost:3001/api/path/".to_string()
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// URL of the directory listing endpoint
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Config {
    /// Load from `dir/config.json`, falling back to defaults.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(FILENAME);
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Directory searched for the config file when none is given on the
    /// command line
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("perch"))
    }
}
