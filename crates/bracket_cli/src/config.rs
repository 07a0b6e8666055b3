//! Generator configuration, read from TOML

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV: &str = "DOUBLE_ELIM_CONFIG";

/// What gets written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{ "matches": [...], "rounds": {...} }`
    #[default]
    Json,
    /// Human-readable table
    Report,
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BracketConfig {
    /// Round number of the first match
    pub starting_round: u32,
    /// Pretty-print the JSON document
    pub pretty: bool,
    pub format: OutputFormat,
    /// Used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            starting_round: 1,
            pretty: false,
            format: OutputFormat::Json,
            log_filter: "warn".to_string(),
        }
    }
}

impl BracketConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("failed to parse bracket config")
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&contents)
    }

    /// Load from the file named by [`CONFIG_ENV`], or fall back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
