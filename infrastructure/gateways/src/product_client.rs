use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::errors::GatewayError;
use business::domain::product::model::Product;
use business::domain::product::services::ProductCatalogService;
use business::domain::shared::value_objects::Sku;

use crate::transport::HttpTransport;
use crate::wire::endpoint;

#[derive(Deserialize)]
struct GetProductResponse {
    name: String,
    price: u32,
}

/// Product catalog over HTTP. Wrap the transport in a `RetryingTransport` to absorb throttling.
pub struct ProductCatalogHttp {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    token: String,
}

impl ProductCatalogHttp {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: String, token: String) -> Self {
        Self {
            transport,
            base_url,
            token,
        }
    }
}

#[async_trait]
impl ProductCatalogService for ProductCatalogHttp {
    async fn get_product(&self, sku: Sku) -> Result<Product, GatewayError> {
        let body = json!({
            "token": self.token,
            "sku": sku.value(),
        });

        let response = self
            .transport
            .post_json(&endpoint(&self.base_url, "get_product"), &body)
            .await?;

        match response.status {
            200 => {
                let product: GetProductResponse = response.json()?;
                Ok(Product {
                    sku,
                    name: product.name,
                    price: product.price,
                })
            }
            404 => Err(GatewayError::NotFound),
            _ => Err(response.into_unexpected_status()),
        }
    }
}
