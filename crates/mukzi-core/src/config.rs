//! Application configuration types.
//!
//! Loaded from `config.toml` by the infrastructure layer; every field has
//! a default so a missing file or section is never an error.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MukziConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
}

/// History log settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Overrides the platform-default history file location.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Recommendation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// How many ranked categories embedders receive. The chat-facing
    /// contract stays at the default of 2.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    crate::recommend::scorer::DEFAULT_TOP_N
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MukziConfig::default();
        assert!(config.history.file.is_none());
        assert_eq!(config.recommend.top_n, 2);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: MukziConfig = toml::from_str("[history]\nfile = \"/tmp/history.json\"\n").unwrap();
        assert_eq!(
            config.history.file.as_deref(),
            Some(std::path::Path::new("/tmp/history.json"))
        );
        assert_eq!(config.recommend.top_n, 2);
    }
}
