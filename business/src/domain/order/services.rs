use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::{Sku, UserId};

use super::model::{OrderId, OrderInfo, OrderItem};

/// Service port for stock levels kept by the order management service.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn get_available_stock(&self, sku: Sku) -> Result<u64, GatewayError>;
}

/// Service port for creating and inspecting orders.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn create_order(
        &self,
        user_id: UserId,
        items: Vec<OrderItem>,
    ) -> Result<OrderId, GatewayError>;

    async fn get_order_info(&self, order_id: OrderId) -> Result<OrderInfo, GatewayError>;
}
