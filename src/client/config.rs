use reqwest::Url;

use crate::client::error::ApiError;
use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};
use crate::shared::RecordId;

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let app = AppConfigBuilder::default()
            .with_env(|key| std::env::var(key).ok())
            .and_then(AppConfigBuilder::build)
            .unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid client configuration: {}", e);
                AppConfig::default()
            });
        Self { app }
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
        })
    }

    /// Point the client at an explicit server
    pub fn for_server(url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(url))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn books_url(&self) -> String {
        self.api_url("/api/books")
    }

    /// URL of one book, with the id percent-encoded as a single path segment
    pub fn book_url(&self, id: &RecordId) -> Result<Url, ApiError> {
        let base = self.books_url();
        let mut url = Url::parse(&base)
            .map_err(|e| ApiError::network(format!("invalid server URL {}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::network(format!("server URL {} cannot take a path", base)))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_url() {
        let config = Config::for_server("http://localhost:4000/").unwrap();
        let id = RecordId::parse("f".repeat(24)).unwrap();
        assert_eq!(
            config.book_url(&id).unwrap().as_str(),
            format!("http://localhost:4000/api/books/{}", "f".repeat(24))
        );
        assert_eq!(config.books_url(), "http://localhost:4000/api/books");
    }

    #[test]
    fn test_book_url_encodes_reserved_characters() {
        let config = Config::for_server("http://localhost:4000").unwrap();
        let cases = [
            ("aaaaaaaaaaaaaaaaaaaaa/..", "/api/books/aaaaaaaaaaaaaaaaaaaaa%2F.."),
            ("aaaaaaaaaaaaaaaaaaaa#xyz", "/api/books/aaaaaaaaaaaaaaaaaaaa%23xyz"),
            ("aaaaaaaaaaaaaaaaaaaaaaa?", "/api/books/aaaaaaaaaaaaaaaaaaaaaaa%3F"),
        ];
        for (raw, expected) in cases {
            let url = config.book_url(&RecordId::parse(raw).unwrap()).unwrap();
            assert_eq!(url.path(), expected, "{}", raw);
            assert_eq!(url.query(), None);
            assert_eq!(url.fragment(), None);
        }
    }

    #[test]
    fn test_book_url_keeps_server_path_prefix() {
        let config = Config::for_server("http://localhost:4000/shelf/").unwrap();
        let id = RecordId::parse("f".repeat(24)).unwrap();
        assert_eq!(
            config.book_url(&id).unwrap().path(),
            format!("/shelf/api/books/{}", "f".repeat(24))
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert!(Config::for_server("localhost:4000").is_err());
    }
}
