use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::Sku;

use super::model::Product;

/// Service port for the remote product catalog.
///
/// Reports an unknown SKU as `GatewayError::NotFound`.
#[async_trait]
pub trait ProductCatalogService: Send + Sync {
    async fn get_product(&self, sku: Sku) -> Result<Product, GatewayError>;
}
