use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use crate::orchestrator::CollectorConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
}

/// Store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("lyricline.db")
}

/// Search backend configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Search backend type
    #[serde(default)]
    pub backend: SearchBackend,
    /// Twitter-specific configuration
    #[serde(default)]
    pub twitter: TwitterConfig,
}

/// Available search backends
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchBackend {
    #[default]
    Twitter,
}

/// Twitter standard search API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TwitterConfig {
    /// API base URL (e.g., "https://api.twitter.com")
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Application-only bearer token used for search requests
    #[serde(default)]
    pub bearer_token: String,
    /// Consumer key, only needed to obtain a bearer token
    #[serde(default)]
    pub app_key: Option<String>,
    /// Consumer secret, only needed to obtain a bearer token
    #[serde(default)]
    pub app_secret: Option<String>,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            bearer_token: String::new(),
            app_key: None,
            app_secret: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.twitter.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Sanitized config for logging (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub store: StoreConfig,
    pub search: SanitizedSearchConfig,
    pub collector: CollectorConfig,
}

/// Sanitized search config (credentials hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSearchConfig {
    pub backend: String,
    pub api_url: String,
    pub bearer_token_configured: bool,
    pub app_credentials_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        let twitter = &config.search.twitter;
        Self {
            store: config.store.clone(),
            search: SanitizedSearchConfig {
                backend: match config.search.backend {
                    SearchBackend::Twitter => "twitter".to_string(),
                },
                api_url: twitter.api_url.clone(),
                bearer_token_configured: !twitter.bearer_token.is_empty(),
                app_credentials_configured: twitter.app_key.is_some()
                    && twitter.app_secret.is_some(),
                timeout_secs: twitter.timeout_secs,
            },
            collector: config.collector.clone(),
        }
    }
}
