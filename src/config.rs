//! Display-format configuration
//!
//! This module handles loading and parsing of the time-format section a
//! consuming application keeps in its configuration file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::formats;

/// Time-format configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFormatConfig {
    /// Default format for timestamps, as a catalog name (e.g. "US_DATE")
    /// or a literal strftime pattern
    pub default_format: String,
    /// Human-readable labels for patterns, shown by format pickers
    pub labels: HashMap<String, String>,
}

impl Default for TimeFormatConfig {
    fn default() -> Self {
        Self {
            default_format: formats::DEFAULT_TIME_FORMAT.to_string(),
            labels: HashMap::new(),
        }
    }
}

impl TimeFormatConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse time format config")
    }

    /// Load a configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Get the configured label for a pattern, if any
    pub fn label_for(&self, pattern: &str) -> Option<&String> {
        self.labels.get(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_database_datetime() {
        let config = TimeFormatConfig::default();
        assert_eq!(config.default_format, "%Y-%m-%d %H:%M:%S");
        assert!(config.labels.is_empty());
    }

    #[test]
    fn parses_partial_toml() {
        let config = TimeFormatConfig::from_toml_str("default_format = \"US_DATE\"").unwrap();
        assert_eq!(config.default_format, "US_DATE");
        assert!(config.labels.is_empty());
    }

    #[test]
    fn parses_labels_table() {
        let config = TimeFormatConfig::from_toml_str(
            "default_format = \"%H:%M:%S\"\n\n[labels]\n\"%H:%M:%S\" = \"Time\"\n",
        )
        .unwrap();
        assert_eq!(config.label_for("%H:%M:%S"), Some(&"Time".to_string()));
        assert_eq!(config.label_for("%Y"), None);
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(TimeFormatConfig::from_toml_str("default_format = ").is_err());
    }
}
