use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagekit.config.json";

/// Pagekit CLI configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the template server
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Bearer token attached to server requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Viewport used by `render` when none is given
    #[serde(default = "default_viewport")]
    pub viewport: String,

    /// Catalog JSON (`{ products, categories }`) used to fill product grids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_server_url() -> String {
    "http://127.0.0.1:3040".to_string()
}

fn default_viewport() -> String {
    "desktop".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Catalog path resolved against the working directory
    pub fn catalog_path(&self, cwd: &str) -> Option<PathBuf> {
        self.catalog.as_ref().map(|p| Path::new(cwd).join(p))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            token: None,
            viewport: default_viewport(),
            catalog: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "serverUrl": "https://pages.example.com/api",
            "token": "secret",
            "viewport": "mobile",
            "catalog": "data/catalog.json"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.server_url, "https://pages.example.com/api");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.viewport, "mobile");
        assert_eq!(
            config.catalog_path("/work"),
            Some(PathBuf::from("/work/data/catalog.json"))
        );
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server_url, "http://127.0.0.1:3040");
        assert_eq!(config.viewport, "desktop");
    }
}
