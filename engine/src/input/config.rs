//! Keyboard Configuration
//!
//! Extra key-map entries loaded from JSON, e.g.
//!
//! ```json
//! { "key_map": { "ControlRight": "ctrl", "ShiftLeft": "shift" } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a keyboard config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read keyboard config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid keyboard config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User-supplied keyboard settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Raw key code -> canonical name, added on top of the built-in map
    pub key_map: BTreeMap<String, String>,
}

impl KeyboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
