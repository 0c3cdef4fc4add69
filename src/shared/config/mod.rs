//! Application configuration module
//!
//! Provides configuration types shared by the server binary and the API client.
//!
//! Values are layered: defaults, then an optional TOML file named by
//! `BOOKSHELF_CONFIG`, then environment variables.
//!
//! | Key          | Environment                           | Default                  |
//! |--------------|---------------------------------------|--------------------------|
//! | `port`       | `PORT` (`PORT_TEST` if `BOOKSHELF_ENV=test`) | `3000`            |
//! | `static_dir` | `STATIC_DIR`                          | `public/build`           |
//! | `server_url` | `BOOKSHELF_API_URL`                   | `http://127.0.0.1:3000`  |

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory for built static assets
pub const DEFAULT_STATIC_DIR: &str = "public/build";

/// Default server URL used by the client
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the server listens on
    pub port: u16,
    /// Directory served for non-API requests
    pub static_dir: PathBuf,
    /// Base URL the client talks to
    pub server_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            server_url: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load from the optional config file and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let builder = match std::env::var("BOOKSHELF_CONFIG") {
            Ok(path) => AppConfigBuilder::from_toml_file(path)?,
            Err(_) => AppConfigBuilder::default(),
        };
        builder.with_env(|key| std::env::var(key).ok())?.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort("0".to_string()));
        }
        Ok(())
    }

    /// Base URL with any trailing slash removed
    pub fn server_url(&self) -> &str {
        self.server_url
            .as_deref()
            .unwrap_or(DEFAULT_SERVER_URL)
            .trim_end_matches('/')
    }
}

/// Builder for AppConfig
///
/// Also the shape of the TOML config file; every key is optional.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    static_dir: Option<PathBuf>,
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Parse builder values from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Overlay environment values, looked up through `lookup`
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port_key = match lookup("BOOKSHELF_ENV").as_deref() {
            Some("test") => "PORT_TEST",
            _ => "PORT",
        };
        if let Some(port) = lookup(port_key) {
            let parsed = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            self.port = Some(parsed);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.static_dir = Some(PathBuf::from(dir));
        }
        if let Some(url) = lookup("BOOKSHELF_API_URL") {
            self.server_url = Some(url);
        }
        Ok(self)
    }

    /// Set the port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the static asset directory
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            static_dir: self
                .static_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            server_url: self.server_url,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_env_port() {
        let config = AppConfigBuilder::default()
            .with_env(env(&[("PORT", "8080"), ("PORT_TEST", "9090")]))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_env_port_in_test_mode() {
        let config = AppConfigBuilder::default()
            .with_env(env(&[
                ("BOOKSHELF_ENV", "test"),
                ("PORT", "8080"),
                ("PORT_TEST", "9090"),
            ]))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_env_rejects_bad_port() {
        let result = AppConfigBuilder::default().with_env(env(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::InvalidPort(p)) if p == "eighty"));
    }

    #[test]
    fn test_env_overrides_file() {
        let builder = AppConfigBuilder::from_toml_str("port = 4000\nstatic_dir = \"dist\"").unwrap();
        let config = builder
            .with_env(env(&[("STATIC_DIR", "public")]))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_unknown_toml_key_is_rejected() {
        let result = AppConfigBuilder::from_toml_str("colour = \"blue\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_url() {
        let result = AppConfig::builder().server_url("ftp://example.com").build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_server_url_trims_slash() {
        let config = AppConfig::builder()
            .server_url("http://localhost:4000/")
            .build()
            .unwrap();
        assert_eq!(config.server_url(), "http://localhost:4000");
    }
}
