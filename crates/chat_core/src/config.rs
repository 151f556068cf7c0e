//! Client configuration
//!
//! Loaded from an optional `config.toml` in the working directory,
//! then overlaid with environment variables.

use serde::{Deserialize, Serialize};

const CONFIG_FILE_PATH: &str = "config.toml";

/// AI replies can take a while; give the backend 30 seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Correlation token sent with each request and used for the
    /// server-side history purge on reset. Optional.
    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            session_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration: defaults, then `config.toml` if present,
    /// then environment variables.
    pub fn load() -> Self {
        let mut config = Config::default();

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        if let Ok(api_base) = std::env::var("CONCIERGE_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(session_id) = std::env::var("CONCIERGE_SESSION_ID") {
            config.session_id = Some(session_id);
        }
        if let Ok(timeout) = std::env::var("CONCIERGE_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.trim().parse::<u64>() {
                config.timeout_secs = secs;
            }
        }
        config
    }
}
