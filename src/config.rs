//! Runtime settings and paths
//!
//! Settings come from, in order: command-line flags (the registry flag also
//! reads `CURSOR_INIT_REGISTRY`), the optional config file, then defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{InitError, Result};

/// Name of the file written into the project directory
pub const CURSORRULES_FILENAME: &str = ".cursorrules";

/// Registry consulted when nothing else is configured
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/cursor-init/registry/main/registry.json";

/// Default network timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Get the config file path
/// - macOS: ~/Library/Application Support/cursor-init/config.json
/// - Linux: ~/.config/cursor-init/config.json
/// - Windows: %APPDATA%/cursor-init/config.json
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cursor-init").join("config.json"))
}

/// Contents of the optional config file; every field may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub registry_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub offline: Option<bool>,
}

impl FileConfig {
    /// Read a config file. A missing file yields the empty config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| InitError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| InitError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Overrides collected from the command line
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub registry_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub offline: bool,
}

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` when running offline
    pub registry_url: Option<String>,
    pub timeout: Duration,
}

impl Settings {
    /// Combine CLI overrides with the user's config file
    pub fn load(overrides: CliOverrides) -> Result<Self> {
        let file = match config_file_path() {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(overrides, file))
    }

    /// Apply precedence: CLI, then file, then defaults
    pub fn merge(overrides: CliOverrides, file: FileConfig) -> Self {
        let offline = overrides.offline || file.offline.unwrap_or(false);

        let registry_url = if offline {
            None
        } else {
            Some(
                overrides
                    .registry_url
                    .or(file.registry_url)
                    .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
            )
        };

        let timeout_secs = overrides
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            registry_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path_is_namespaced() {
        if let Some(path) = config_file_path() {
            assert!(path.ends_with("cursor-init/config.json"));
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::merge(CliOverrides::default(), FileConfig::default());
        assert_eq!(settings.registry_url.as_deref(), Some(DEFAULT_REGISTRY_URL));
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_cli_beats_file() {
        let overrides = CliOverrides {
            registry_url: Some("http://cli/registry.json".to_string()),
            timeout_secs: Some(3),
            offline: false,
        };
        let file = FileConfig {
            registry_url: Some("http://file/registry.json".to_string()),
            timeout_secs: Some(60),
            offline: None,
        };
        let settings = Settings::merge(overrides, file);
        assert_eq!(
            settings.registry_url.as_deref(),
            Some("http://cli/registry.json")
        );
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_file_beats_default() {
        let file = FileConfig {
            registry_url: Some("http://file/registry.json".to_string()),
            timeout_secs: None,
            offline: None,
        };
        let settings = Settings::merge(CliOverrides::default(), file);
        assert_eq!(
            settings.registry_url.as_deref(),
            Some("http://file/registry.json")
        );
    }

    #[test]
    fn test_offline_from_either_source() {
        let cli = CliOverrides {
            offline: true,
            ..Default::default()
        };
        assert!(Settings::merge(cli, FileConfig::default())
            .registry_url
            .is_none());

        let file = FileConfig {
            offline: Some(true),
            ..Default::default()
        };
        assert!(Settings::merge(CliOverrides::default(), file)
            .registry_url
            .is_none());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let config = FileConfig::load(&temp.path().join("config.json")).unwrap();
        assert!(config.registry_url.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"timeout_secs": 2}"#).unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.timeout_secs, Some(2));
        assert!(config.registry_url.is_none());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = FileConfig::load(&path);
        assert!(matches!(result, Err(InitError::Config { .. })));
    }
}
