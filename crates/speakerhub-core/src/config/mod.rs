//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate, with environment variables prefixed `SPEAKERHUB_`
//! layered on top. Every field carries a serde default so an empty file
//! is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Remote collection endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Media service settings.
    #[serde(default)]
    pub media: MediaConfig,
    /// Speaker list presentation settings.
    #[serde(default)]
    pub list: ListConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote collection endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the event platform API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Media service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Base URL of the media service. Defaults to the API base URL
    /// when left empty.
    #[serde(default)]
    pub base_url: String,
    /// Upload timeout in seconds.
    #[serde(default = "default_media_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_seconds: default_media_timeout(),
        }
    }
}

/// Speaker list presentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Number of speakers per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "speakerhub_service=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: "pretty" or "json".
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration file with an environment-specific
    /// overlay and environment variables prefixed with `SPEAKERHUB_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(config::Environment::with_prefix("SPEAKERHUB").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The effective media service base URL.
    pub fn media_base_url(&self) -> &str {
        if self.media.base_url.is_empty() {
            &self.api.base_url
        } else {
            &self.media.base_url
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_media_timeout() -> u64 {
    120
}

fn default_page_size() -> u64 {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
