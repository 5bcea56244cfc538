//! Client configuration.

use std::env;
use std::time::Duration;

/// Default base URL of the user directory API
pub const DEFAULT_API_URL: &str = "http://localhost:5008";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, without the `/api/users` path
    pub api_url: String,
    pub timeout_seconds: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("USER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            ..Self::default()
        }
    }

    /// Client with the given base URL and the default timeout.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}
