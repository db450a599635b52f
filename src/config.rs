use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

/// Log output style
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the upstream lottery catalog
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// Timeout for a single upstream attempt, in milliseconds
    #[serde(default = "default_catalog_request_timeout_ms")]
    pub catalog_request_timeout_ms: u64,

    /// Budget for the whole fetch including retries, in milliseconds
    #[serde(default = "default_catalog_fetch_deadline_ms")]
    pub catalog_fetch_deadline_ms: u64,

    /// Optional TOML file overriding the normalization lookup tables
    #[serde(default)]
    pub catalog_tables_path: Option<PathBuf>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS (comma separated in the environment)
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Whole-request timeout for inbound HTTP requests, in seconds
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_catalog_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_catalog_request_timeout_ms() -> u64 {
    10_000
}

fn default_catalog_fetch_deadline_ms() -> u64 {
    15_000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5000".to_string(),
        "http://localhost:5001".to_string(),
    ]
}

fn default_http_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_api_url: default_catalog_api_url(),
            catalog_request_timeout_ms: default_catalog_request_timeout_ms(),
            catalog_fetch_deadline_ms: default_catalog_fetch_deadline_ms(),
            catalog_tables_path: None,
            host: default_host(),
            port: default_port(),
            cors_allowed_origins: default_cors_allowed_origins(),
            http_timeout_secs: default_http_timeout_secs(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn catalog_request_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog_request_timeout_ms)
    }

    pub fn catalog_fetch_deadline(&self) -> Duration {
        Duration::from_millis(self.catalog_fetch_deadline_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
