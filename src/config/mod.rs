//! Configuration
//!
//! YAML config file plus the get/set plumbing behind the `config`
//! subcommand. Keys use dot notation matching the file's camelCase
//! layout.

pub mod loader;
pub mod schema;

pub use loader::{config_path, ConfigLoader};
pub use schema::Config;

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "defaultNamespace" => Ok(config.default_namespace.clone()),
        "query.staleSeconds" => Ok(config.query.stale_seconds.to_string()),
        "query.retries" => Ok(config.query.retries.to_string()),
        "ui.enableMouse" => Ok(config.ui.enable_mouse.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "defaultNamespace" => {
            config.default_namespace = value.to_string();
        }
        "query.staleSeconds" => {
            config.query.stale_seconds = value
                .parse()
                .context("query.staleSeconds must be a number")?;
        }
        "query.retries" => {
            config.query.retries = value.parse().context("query.retries must be a number")?;
        }
        "ui.enableMouse" => {
            config.ui.enable_mouse = value
                .parse()
                .context("ui.enableMouse must be 'true' or 'false'")?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
    Ok(())
}

/// All known keys, for `config list`.
pub fn config_keys() -> &'static [&'static str] {
    &[
        "defaultNamespace",
        "query.staleSeconds",
        "query.retries",
        "ui.enableMouse",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip() {
        let mut config = Config::default();
        set_config_value(&mut config, "defaultNamespace", "flux-system").unwrap();
        assert_eq!(
            get_config_value(&config, "defaultNamespace").unwrap(),
            "flux-system"
        );

        set_config_value(&mut config, "query.staleSeconds", "15").unwrap();
        assert_eq!(config.query.stale_seconds, 15);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = Config::default();
        assert!(get_config_value(&config, "bogus").is_err());
        assert!(set_config_value(&mut config, "bogus", "1").is_err());
    }

    #[test]
    fn test_bad_value_rejected() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "query.retries", "many").is_err());
        assert!(set_config_value(&mut config, "ui.enableMouse", "yes").is_err());
    }

    #[test]
    fn test_every_listed_key_is_gettable() {
        let config = Config::default();
        for key in config_keys() {
            assert!(get_config_value(&config, key).is_ok(), "key {key}");
        }
    }
}
