//! Configuration management

use std::path::PathBuf;

use ggjc_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Static host configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Address to bind to
    pub addr: String,

    /// Directory holding the logo and photographs, served under `/assets`
    pub asset_dir: PathBuf,

    /// Directory holding the compiled client bundle, served under `/pkg`
    pub bundle_dir: PathBuf,

    /// File stem of the client bundle (`<name>.js` / `<name>_bg.wasm`)
    pub bundle_name: String,

    /// Document title
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
            asset_dir: PathBuf::from("site/assets"),
            bundle_dir: PathBuf::from("site/dist"),
            bundle_name: "ggjc_site".to_string(),
            title: "Global Game Jam Cochabamba 2026".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            Self::load_from_file(p)
        } else {
            Ok(Self::load_from_env())
        }
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse TOML; missing keys keep their defaults
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables
    fn load_from_env() -> Self {
        let defaults = Self::default();

        Config {
            addr: env_or("GGJC_ADDR", defaults.addr),
            asset_dir: env_or("GGJC_ASSET_DIR", defaults.asset_dir),
            bundle_dir: env_or("GGJC_BUNDLE_DIR", defaults.bundle_dir),
            bundle_name: env_or("GGJC_BUNDLE_NAME", defaults.bundle_name),
            title: env_or("GGJC_TITLE", defaults.title),
        }
    }
}

fn env_or<T: From<String>>(var_name: &str, default: T) -> T {
    std::env::var(var_name).map(T::from).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            addr = "127.0.0.1:3000"
            asset_dir = "/srv/ggjc/assets"
            bundle_dir = "/srv/ggjc/pkg"
            bundle_name = "site"
            title = "GGJ Cbba"
            "#,
        )
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:3000");
        assert_eq!(config.asset_dir, PathBuf::from("/srv/ggjc/assets"));
        assert_eq!(config.bundle_dir, PathBuf::from("/srv/ggjc/pkg"));
        assert_eq!(config.bundle_name, "site");
        assert_eq!(config.title, "GGJ Cbba");
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = Config::parse(r#"addr = "127.0.0.1:9000""#).unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000");
        assert_eq!(config.bundle_name, Config::default().bundle_name);
        assert_eq!(config.asset_dir, Config::default().asset_dir);
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = Config::parse("addr = [").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
        assert!(err.to_string().starts_with("Configuration error: Failed to parse config"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load(Some("/nonexistent/ggjc.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
