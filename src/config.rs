use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How page HTML is retrieved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Request the page directly
    #[default]
    Direct,
    /// Go through the relay endpoints in order until one returns HTML
    Relay,
}

/// Configuration for fetching and serving analyses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub fetch_mode: FetchMode,

    /// Relay endpoint templates; `{url}` is replaced by the encoded target URL,
    /// templates without it get the encoded URL appended
    #[serde(default = "default_relay_endpoints")]
    pub relay_endpoints: Vec<String>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Address the HTTP service binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_relay_endpoints() -> Vec<String> {
    vec![
        "https://corsproxy.io/?{url}".to_string(),
        "https://api.allorigins.win/raw?url={url}".to_string(),
        "https://api.codetabs.com/v1/proxy?quest={url}".to_string(),
    ]
}

fn default_user_agent() -> String {
    format!("seo-lens/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_bind_address() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fetch_mode: FetchMode::default(),
            relay_endpoints: default_relay_endpoints(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            bind_address: default_bind_address(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
