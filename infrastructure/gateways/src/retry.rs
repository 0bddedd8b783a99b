use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::logger::Logger;

use crate::transport::{HttpResponse, HttpTransport};

/// How often and how patiently a throttled call is re-issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt, so at most `max_retries + 1` calls are made.
    pub max_retries: u32,
    /// Fixed delay between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Decorator that re-issues calls answered with a throttling status (420/429).
///
/// Any other status and every transport error is handed back after the first attempt.
/// Once retries are exhausted the last throttled response is returned as-is.
pub struct RetryingTransport {
    inner: Arc<dyn HttpTransport>,
    policy: RetryPolicy,
    logger: Arc<dyn Logger>,
}

impl RetryingTransport {
    pub fn new(inner: Arc<dyn HttpTransport>, policy: RetryPolicy, logger: Arc<dyn Logger>) -> Self {
        Self {
            inner,
            policy,
            logger,
        }
    }
}

#[async_trait]
impl HttpTransport for RetryingTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, GatewayError> {
        let mut retries = 0;
        loop {
            let response = self.inner.post_json(url, body).await?;

            if !response.is_throttled() || retries >= self.policy.max_retries {
                return Ok(response);
            }

            retries += 1;
            self.logger.warn(&format!(
                "{} throttled with status {}, retry {}/{} in {:?}",
                url, response.status, retries, self.policy.max_retries, self.policy.backoff
            ));
            tokio::time::sleep(self.policy.backoff).await;
        }
    }
}
