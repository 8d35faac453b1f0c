//! engine configuration
//!
//! hosts that wire the engine up from a settings file use [`EngineConfig`];
//! it covers the options that make sense as data (attribute naming, shadow
//! piercing). JSON5 is accepted so config files can carry comments.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// settings for building a [`crate::Dispatcher`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// prefix for the per-event attribute name; `data-` matches host datasets
    pub attribute_prefix: String,
    /// when set, matched targets are resolved by piercing shadow roots,
    /// bounded by the closest ancestor matching this selector
    pub pierce_selector: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            attribute_prefix: "data-".to_string(),
            pierce_selector: None,
        }
    }
}

/// config parse failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Parse(#[from] json5::Error),
}

impl FromStr for EngineConfig {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(json5::from_str(input)?)
    }
}

impl EngineConfig {
    /// load a config file (JSON or JSON5)
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        content
            .parse()
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }
}
