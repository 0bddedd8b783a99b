use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::logger::Logger;

use crate::transport::{HttpResponse, HttpTransport};

/// Bounds the total time of a call, retries and backoff included.
///
/// An elapsed deadline is reported as `GatewayError::Timeout`; the in-flight attempt is dropped.
pub struct DeadlineTransport {
    inner: Arc<dyn HttpTransport>,
    deadline: Duration,
    logger: Arc<dyn Logger>,
}

impl DeadlineTransport {
    pub fn new(inner: Arc<dyn HttpTransport>, deadline: Duration, logger: Arc<dyn Logger>) -> Self {
        Self {
            inner,
            deadline,
            logger,
        }
    }
}

#[async_trait]
impl HttpTransport for DeadlineTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, GatewayError> {
        match tokio::time::timeout(self.deadline, self.inner.post_json(url, body)).await {
            Ok(result) => result,
            Err(_) => {
                self.logger.warn(&format!(
                    "{} gave no answer within {:?}",
                    url, self.deadline
                ));
                Err(GatewayError::Timeout)
            }
        }
    }
}
