use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Construction-time settings for [`NebulaClient`](super::client::NebulaClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Transport to use instead of the default one (custom TLS, proxies...).
    pub http_client: Option<reqwest::Client>,
    /// Applied to every request the client sends.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http_client: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "timeout".to_string(),
                value: format!("{:?}", self.timeout),
                reason: "request timeout must be positive".to_string(),
            });
        }
        Ok(())
    }
}
