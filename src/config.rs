//! Application configuration
//!
//! Loaded from `~/.mediscan/config.toml`, created with defaults on first
//! run. The only tunables are the facility-map default center/zoom and an
//! optional readline history file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{MediScanError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Default center and zoom for the facility map link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        // Metro Manila, matching the region the medicine catalog targets.
        MapConfig {
            latitude: 14.5995,
            longitude: 120.9842,
            zoom: 13,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Readline history file; input history is not persisted when unset.
    pub history_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default path, creating a default file if
    /// it doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file here is an error: the user
    /// asked for that specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MediScanError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            MediScanError::ConfigError("could not determine home directory".to_string())
        })?;

        Ok(home.join(".mediscan").join("config.toml"))
    }

    /// History file path, if input history should persist.
    pub fn history_file(&self) -> Option<&Path> {
        self.session.history_file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.map.zoom, 13);
        assert!(config.session.history_file.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.map.latitude = 10.3157;
        config.map.longitude = 123.8854;
        config.map.zoom = 15;
        config.session.history_file = Some(PathBuf::from("/tmp/history"));

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.map.latitude, 10.3157);
        assert_eq!(loaded.map.longitude, 123.8854);
        assert_eq!(loaded.map.zoom, 15);
        assert_eq!(loaded.session.history_file, Some(PathBuf::from("/tmp/history")));
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load_from(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[session]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.map.zoom, MapConfig::default().zoom);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "map = \"not a table\"").unwrap();

        match Config::load_from(&path) {
            Err(MediScanError::ConfigParse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }
}
