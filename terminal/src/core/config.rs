//! Client configuration from environment variables

use std::time::Duration;

/// Default backend API root (everything is mounted under `/api`)
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Session client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend API root, without a trailing slash
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_url(&api_url.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `BOOKSWAP_API_URL`: backend API root
    /// - `BOOKSWAP_TIMEOUT_SECS`: per-request timeout
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("BOOKSWAP_API_URL")
                .map(|url| normalize_url(&url))
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout_secs: std::env::var("BOOKSWAP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the API root (command line takes precedence over the environment)
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = normalize_url(api_url);
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of an API path such as `/requests/7/accept`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
