//! Configuration schema
//!
//! Serde structures for the YAML config file. Every field carries a
//! default so a partial (or missing) file still yields a full config.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Starting namespace filter; empty means all namespaces
    #[serde(default)]
    pub default_namespace: String,

    /// Query layer tuning
    #[serde(default)]
    pub query: QueryConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_namespace: String::new(),
            query: QueryConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Query layer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryConfig {
    /// Seconds a cached resource stays fresh before a fetch goes back
    /// to the cluster
    #[serde(default = "default_stale_seconds")]
    pub stale_seconds: u64,

    /// Automatic retries per failed request
    #[serde(default = "default_retries")]
    pub retries: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_seconds: default_stale_seconds(),
            retries: default_retries(),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Enable mouse support
    #[serde(default = "default_true")]
    pub enable_mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_mouse: default_true(),
        }
    }
}

fn default_stale_seconds() -> u64 {
    30
}

fn default_retries() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.default_namespace.is_empty());
        assert_eq!(config.query.stale_seconds, 30);
        assert_eq!(config.query.retries, 1);
        assert!(config.ui.enable_mouse);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("defaultNamespace: flux-system").unwrap();
        assert_eq!(config.default_namespace, "flux-system");
        assert_eq!(config.query.stale_seconds, 30);
    }

    #[test]
    fn test_camel_case_keys() {
        let config: Config = serde_yaml::from_str("query:\n  staleSeconds: 5\n").unwrap();
        assert_eq!(config.query.stale_seconds, 5);
    }
}
