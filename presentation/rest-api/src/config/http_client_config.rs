use std::time::Duration;

use gateways::retry::RetryPolicy;

use super::env::optional;

/// Outbound HTTP settings shared by every gateway.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub max_retries: u32,
    pub backoff: Duration,
    pub deadline: Duration,
}

impl HttpClientConfig {
    /// Environment variables:
    /// - HTTP_CLIENT_TIMEOUT_SECS: per-request deadline (default: 5)
    /// - HTTP_CLIENT_MAX_RETRIES: retries on 420/429 (default: 3)
    /// - HTTP_CLIENT_BACKOFF_MS: pause between retries (default: 1000)
    /// - HTTP_CLIENT_DEADLINE_MS: total budget of one downstream call, retries included (default: 10000)
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            timeout: Duration::from_secs(optional("HTTP_CLIENT_TIMEOUT_SECS", 5)?),
            max_retries: optional("HTTP_CLIENT_MAX_RETRIES", 3)?,
            backoff: Duration::from_millis(optional("HTTP_CLIENT_BACKOFF_MS", 1000)?),
            deadline: Duration::from_millis(optional("HTTP_CLIENT_DEADLINE_MS", 10_000)?),
        };
        if config.deadline.is_zero() {
            anyhow::bail!("HTTP_CLIENT_DEADLINE_MS must be greater than zero");
        }
        Ok(config)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            backoff: self.backoff,
        }
    }
}
