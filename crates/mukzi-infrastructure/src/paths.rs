//! Unified path management for mukzi data files.
//!
//! All mukzi configuration and history data live under the platform's
//! standard config/data directories, resolved through the `dirs` crate so
//! behavior is consistent across Linux, macOS, and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for mukzi.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/mukzi/             # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/mukzi/        # Data directory
/// └── history.json             # Append-only history log
/// ```
pub struct MukziPaths;

impl MukziPaths {
    /// Returns the mukzi configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/mukzi/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("mukzi"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the mukzi data directory, used for the history log.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/mukzi/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("mukzi"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the history log file.
    pub fn history_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("history.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = MukziPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("mukzi"));
    }

    #[test]
    fn test_config_file() {
        let config_file = MukziPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = MukziPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_history_file() {
        let history_file = MukziPaths::history_file().unwrap();
        assert!(history_file.ends_with("history.json"));
        let data_dir = MukziPaths::data_dir().unwrap();
        assert!(history_file.starts_with(&data_dir));
    }
}
