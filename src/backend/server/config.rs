/**
 * Server Configuration
 *
 * This module handles loading of server configuration.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (with `.env` support
 * in the binary) layered over an optional TOML file, with sensible defaults
 * for local development.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup. An
 * invalid configuration falls back to the defaults.
 */

use crate::shared::AppConfig;

/// Load the server configuration, falling back to defaults on error
///
/// # Example
///
/// ```rust
/// use bookshelf::backend::server::config::load_config;
///
/// let config = load_config();
/// assert!(config.port > 0);
/// ```
pub fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => {
            tracing::info!(
                "Loaded configuration: port {}, static assets from {}",
                config.port,
                config.static_dir.display()
            );
            config
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            tracing::warn!("Continuing with default configuration");
            AppConfig::default()
        }
    }
}
