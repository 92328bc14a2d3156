//! Configuration System
//!
//! Layered configuration: an optional `discdump.toml` next to the scanned
//! tree (or an explicit `--config` path) merged with `DISCDUMP_`-prefixed
//! environment variables. Everything has a working default; a missing config
//! file is not an error.

use crate::logging::LoggingConfig;
use crate::walker::WalkerConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Config file name looked up next to the scanned root.
pub const CONFIG_FILE_NAME: &str = "discdump.toml";

#[derive(Debug, Error)]
#[error("configuration error: {0}")]
pub struct ConfigError(#[from] config::ConfigError);

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Traversal configuration
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Traversal settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Path components to skip entirely (default: none)
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Maximum traversal depth (default: unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

impl ScanConfig {
    /// Translate into walker configuration.
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            ignore_patterns: self.ignore_patterns.clone(),
            max_depth: self.max_depth,
        }
    }
}

/// Loads configuration from file and environment sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a scan of `root`.
    ///
    /// Precedence: `DISCDUMP_`-prefixed environment variables over
    /// `<root>/discdump.toml` over defaults.
    pub fn load(root: &Path) -> Result<DumpConfig, ConfigError> {
        let mut builder = Config::builder();

        let file = root.join(CONFIG_FILE_NAME);
        if file.exists() {
            if let Some(path) = file.to_str() {
                builder = builder.add_source(File::with_name(path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("DISCDUMP").separator("__"));

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Load configuration from an explicit file path.
    pub fn load_from_file(path: &Path) -> Result<DumpConfig, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("DISCDUMP").separator("__"));

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::load(temp_dir.path()).unwrap();

        assert_eq!(config.logging.level, "info");
        assert!(!config.scan.follow_symlinks);
        assert!(config.scan.ignore_patterns.is_empty());
        assert!(config.scan.max_depth.is_none());
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"
            [logging]
            level = "debug"

            [scan]
            follow_symlinks = true
            ignore_patterns = ["lost+found"]
            "#,
        )
        .unwrap();

        let config = ConfigLoader::load(temp_dir.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.scan.follow_symlinks);
        assert_eq!(config.scan.ignore_patterns, vec!["lost+found".to_string()]);
    }

    #[test]
    fn test_load_from_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[scan]\nmax_depth = 3\n").unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.scan.max_depth, Some(3));
    }

    #[test]
    fn test_walker_config_mapping() {
        let scan = ScanConfig {
            follow_symlinks: true,
            ignore_patterns: vec!["x".to_string()],
            max_depth: Some(2),
        };
        let walker = scan.walker_config();
        assert!(walker.follow_symlinks);
        assert_eq!(walker.ignore_patterns, vec!["x".to_string()]);
        assert_eq!(walker.max_depth, Some(2));
    }
}
