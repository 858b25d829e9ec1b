//! Plugin configuration.
//!
//! Everything has a default, so an empty JSON object (or no config file at
//! all) gives the stock behavior.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PluginError;
use crate::offset::Offset;
use crate::suggest::DEFAULT_SUGGESTIONS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Offsets offered in the quick-action box.
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,

    /// Offset used when the caller doesn't supply one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_offset: Option<Offset>,
}

fn default_suggestions() -> Vec<String> {
    DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestions: default_suggestions(),
            default_offset: None,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, PluginError> {
        serde_json::from_str(json).map_err(|e| PluginError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, PluginError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
