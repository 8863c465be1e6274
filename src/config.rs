//! Build-Time Configuration
//!
//! Settings compiled into the bundle from `assets/config.toml`. A
//! malformed file falls back to defaults rather than aborting startup.

use std::sync::LazyLock;

use serde::Deserialize;

const CONFIG_TOML: &str = include_str!("../assets/config.toml");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Origin of the task service; empty means same-origin
    #[serde(default)]
    pub base_url: String,
}

static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| match toml::from_str(CONFIG_TOML) {
    Ok(config) => config,
    Err(error) => {
        tracing::error!(%error, "invalid embedded config, using defaults");
        AppConfig::default()
    }
});

pub fn get() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config: AppConfig = toml::from_str(CONFIG_TOML).unwrap();
        // Default deployment serves the API from the same origin
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_base_url_override() {
        let config: AppConfig =
            toml::from_str("[api]\nbase_url = \"https://tasks.example.net\"").unwrap();
        assert_eq!(config.api.base_url, "https://tasks.example.net");
    }
}
