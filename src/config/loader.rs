//! Configuration loading and saving
//!
//! A single YAML file under the platform config directory, with
//! environment variable overrides on top. A missing file is not an
//! error; it yields the built-in defaults.

use super::schema::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Configuration directory.
///
/// FLUXDASH_CONFIG_DIR wins; otherwise the platform config dir
/// (~/.config/fluxdash on Unix, AppData on Windows).
pub fn config_dir() -> PathBuf {
    std::env::var("FLUXDASH_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            directories::ProjectDirs::from("", "", "fluxdash")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".").join(".config").join("fluxdash"))
        })
}

/// Path of the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config file, falling back to defaults if absent, then
    /// apply environment overrides.
    pub fn load() -> Result<Config> {
        let path = config_path();
        let config = if path.exists() {
            Self::load_file(&path)?
        } else {
            Config::default()
        };
        Ok(Self::apply_env_overrides(config))
    }

    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(namespace) = std::env::var("FLUXDASH_DEFAULT_NAMESPACE") {
            config.default_namespace = namespace;
        }
        if let Ok(stale) = std::env::var("FLUXDASH_STALE_SECONDS")
            && let Ok(val) = stale.parse::<u64>()
        {
            config.query.stale_seconds = val;
        }
        config
    }

    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;
        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &config_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.default_namespace = "team-a".to_string();
        config.query.stale_seconds = 10;

        ConfigLoader::save(&config, &path).unwrap();
        let loaded = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::load_file(&dir.path().join("nope.yaml")).is_err());
    }
}
