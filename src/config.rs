//! Configuration
//!
//! JSON settings file for the listener, the catalog source and matching.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub static_dir: Option<String>,

    // Catalog
    pub catalog_url: String,
    pub catalog_key: String,
    pub name_field: String,
    pub fetch_timeout_secs: u64,

    // Matching
    pub exact_cutoff: f64,
    pub alternatives_cutoff: f64,
    pub max_alternatives: usize,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: None,
            catalog_url:
                "https://api.sheety.co/e5f42c6a1510007d10970f8672a067dd/داتا تجربة/medicinesPrices"
                    .to_string(),
            catalog_key: "medicinesPrices".to_string(),
            name_field: "medicine".to_string(),
            fetch_timeout_secs: 10,
            exact_cutoff: 0.4,
            alternatives_cutoff: 0.2,
            max_alternatives: 3,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from a file; missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Backup corrupt file for debugging
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Load config from a file the operator named explicitly.
    ///
    /// Unlike [`Config::load_from`], a missing or unparsable file is an
    /// error and the file is left untouched.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Save config to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pharmabot")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.catalog_key, "medicinesPrices");
        assert_eq!(config.name_field, "medicine");
        assert_eq!(config.exact_cutoff, 0.4);
        assert_eq!(config.alternatives_cutoff, 0.2);
        assert_eq!(config.max_alternatives, 3);
        assert!(config.static_dir.is_none());
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"port": 8080}"#).expect("Failed to parse");
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_config_round_trip_on_disk() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.port = 6000;
        config.static_dir = Some("public".to_string());
        config.save_to(&path).expect("Failed to save");

        let restored = Config::load_from(&path).expect("Failed to load");
        assert_eq!(restored.port, 6000);
        assert_eq!(restored.static_dir.as_deref(), Some("public"));
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("absent.json")).expect("Failed to load");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_strict_load_rejects_corrupt_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "port": 5977, bad"#).expect("Failed to write");

        let err = Config::load_strict(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid config file"));
        assert!(path.exists());
        assert!(!dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_strict_load_rejects_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = Config::load_strict(&dir.path().join("absent.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("cannot read config file"));
    }

    #[test]
    fn test_strict_load_reads_valid_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"port": 5977}"#).expect("Failed to write");

        assert_eq!(Config::load_strict(&path).expect("Failed to load").port, 5977);
    }

    #[test]
    fn test_config_corrupt_file_is_backed_up() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").expect("Failed to write");

        let config = Config::load_from(&path).expect("Failed to load");
        assert_eq!(config.port, 5000);
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }
}
