//! Configuration loading.

use crate::paths::MukziPaths;
use mukzi_core::MukziError;
use mukzi_core::config::MukziConfig;
use std::path::Path;

/// Loads the configuration from the platform-default location.
///
/// A missing config file yields the defaults; an unreadable or
/// malformed file is an error.
pub fn load_config() -> Result<MukziConfig, MukziError> {
    let path = MukziPaths::config_file()
        .map_err(|e| MukziError::config(format!("cannot resolve config path: {e}")))?;
    load_config_from(&path)
}

/// Loads the configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<MukziConfig, MukziError> {
    if !path.exists() {
        tracing::debug!(?path, "no config file, using defaults");
        return Ok(MukziConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: MukziConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, MukziConfig::default());
    }

    #[test]
    fn test_loads_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[history]\nfile = \"/var/lib/mukzi/history.json\"\n\n[recommend]\ntop_n = 5\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(
            config.history.file.as_deref(),
            Some(std::path::Path::new("/var/lib/mukzi/history.json"))
        );
        assert_eq!(config.recommend.top_n, 5);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "not toml [[").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.is_serialization());
    }
}
