//! Console configuration
//!
//! Read from `THAL_*` environment variables, then overridden by flags.

use std::time::Duration;

use thal_client::ClientConfig;

/// Admin console configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | THAL_API_URL | http://localhost:5000 | Backend base URL |
/// | THAL_REQUEST_TIMEOUT_MS | 10000 | Per-request timeout (ms) |
/// | THAL_API_TOKEN | - | Bearer token sent with every request |
/// | THAL_LOG_LEVEL | info | Default log filter when `RUST_LOG` is unset |
/// | THAL_LOG_DIR | - | Directory for daily rolling log files |
///
/// Command-line flags take precedence over the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_url: String,
    pub request_timeout_ms: u64,
    pub api_token: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl AdminConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_url: non_empty("THAL_API_URL").unwrap_or_else(|| "http://localhost:5000".into()),
            request_timeout_ms: non_empty("THAL_REQUEST_TIMEOUT_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(10000),
            api_token: non_empty("THAL_API_TOKEN"),
            log_level: non_empty("THAL_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("THAL_LOG_DIR"),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Settings for the backend client
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone()).with_timeout(self.request_timeout());
        match &self.api_token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
