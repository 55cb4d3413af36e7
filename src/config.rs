//! Configuration for taskify

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the task and settings documents
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskify")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

impl Config {
    /// Load config from an explicit file, the default locations, or defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config from {}", config_path.display()))?;
            let config: Config = serde_yaml::from_str(&content).context("Failed to parse config file")?;
            return Ok(config);
        }

        let default_paths = [
            dirs::config_dir().map(|p| p.join("taskify").join("config.yml")),
            Some(PathBuf::from("taskify.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                match std::fs::read_to_string(path)
                    .map_err(eyre::Report::from)
                    .and_then(|content| serde_yaml::from_str(&content).map_err(eyre::Report::from))
                {
                    Ok(config) => {
                        tracing::info!("Loaded config from: {}", path.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_path_is_set() {
        let config = Config::default();
        assert!(config.store_path.ends_with("taskify"));
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = "store_path: /tmp/taskify-test\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/taskify-test"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.store_path, Config::default().store_path);
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "store_path: /tmp/explicit\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/explicit"));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let missing = PathBuf::from("/nonexistent/taskify.yml");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
