use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness endpoint for orchestrators and load balancers.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports "healthy" while the process is serving requests. Downstream
    /// services are not contacted.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;

    use super::*;

    #[tokio::test]
    async fn should_report_healthy() {
        let app = Route::new().nest("/", OpenApiService::new(Api::new(), "test", "0.1.0"));
        let cli = TestClient::new(app);

        let resp = cli.get("/health").send().await;

        resp.assert_status(StatusCode::OK);
        let json = resp.json().await;
        json.value().object().get("status").assert_string("healthy");
    }
}
