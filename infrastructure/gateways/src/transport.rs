use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use business::domain::errors::GatewayError;

/// Status code and raw body of a downstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 429 Too Many Requests, or the non-standard 420 some upstreams use for rate limiting.
    pub fn is_throttled(&self) -> bool {
        matches!(self.status, 420 | 429)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_slice(&self.body).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    /// The `message` of a `{"message": ...}` error body, otherwise the raw body text.
    pub fn error_message(&self) -> String {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        match self.json::<ErrorBody>() {
            Ok(body) => body.message,
            Err(_) => String::from_utf8_lossy(&self.body).trim().to_string(),
        }
    }

    /// Turns a status the caller has no mapping for into an error that keeps the downstream's explanation.
    pub fn into_unexpected_status(self) -> GatewayError {
        GatewayError::unexpected_status(self.status, self.error_message())
    }
}

/// Outbound JSON-over-HTTP calls. Non-2xx statuses are returned as responses, not errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, GatewayError>;
}

/// `reqwest`-backed transport. Every request is bounded by the client timeout.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(err.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, GatewayError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
