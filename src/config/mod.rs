//! Configuration for the dashboard client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the school management API
    pub api_url: String,
    /// Path to the persisted session token
    pub token_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("CLASSDASH_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        let token_path = env::var("CLASSDASH_TOKEN_PATH")
            .unwrap_or_else(|_| "./data/token".to_string())
            .into();

        let log_level = env::var("CLASSDASH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            token_path,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        // env vars are process-global; only assert on shape, not exact values
        let config = Config::from_env();
        assert!(!config.api_url.is_empty());
        assert!(!config.api_url.ends_with('/'));
        assert!(!config.log_level.is_empty());
    }
}
