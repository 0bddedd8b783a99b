use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::errors::GatewayError;
use business::domain::logger::Logger;
use business::domain::order::model::{OrderId, OrderInfo, OrderItem, OrderStatus};
use business::domain::order::services::{OrderService, StockService};
use business::domain::shared::value_objects::{Sku, UserId};

use crate::transport::{HttpResponse, HttpTransport};
use crate::wire::{de_i64, de_u64, endpoint};

#[derive(Deserialize)]
struct StockInfoResponse {
    #[serde(deserialize_with = "de_u64")]
    count: u64,
}

#[derive(Deserialize)]
struct OrderCreateResponse {
    #[serde(rename = "orderID", deserialize_with = "de_i64")]
    order_id: i64,
}

#[derive(Deserialize)]
struct WireItem {
    #[serde(deserialize_with = "de_u64")]
    sku: u64,
    #[serde(deserialize_with = "de_u64")]
    count: u64,
}

#[derive(Deserialize)]
struct OrderInfoResponse {
    status: String,
    #[serde(deserialize_with = "de_i64")]
    user: i64,
    #[serde(default)]
    items: Vec<WireItem>,
}

impl TryFrom<WireItem> for OrderItem {
    type Error = GatewayError;

    fn try_from(item: WireItem) -> Result<Self, Self::Error> {
        let sku = u32::try_from(item.sku)
            .ok()
            .and_then(|raw| Sku::new(raw).ok())
            .ok_or_else(|| GatewayError::Decode(format!("invalid sku {}", item.sku)))?;
        let count = u16::try_from(item.count)
            .map_err(|_| GatewayError::Decode(format!("invalid count {}", item.count)))?;

        Ok(OrderItem { sku, count })
    }
}

impl TryFrom<OrderInfoResponse> for OrderInfo {
    type Error = GatewayError;

    fn try_from(response: OrderInfoResponse) -> Result<Self, Self::Error> {
        let user_id = UserId::new(response.user)
            .map_err(|_| GatewayError::Decode(format!("invalid user {}", response.user)))?;
        let items = response
            .items
            .into_iter()
            .map(OrderItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let status = response
            .status
            .parse::<OrderStatus>()
            .unwrap_or_else(|never| match never {});

        Ok(OrderInfo {
            status,
            user_id,
            items,
        })
    }
}

/// Client for the order management service: stock levels, order creation and order lookup.
///
/// Calls go through the plain transport; only the product catalog is throttled upstream.
pub struct LomsHttp {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    logger: Arc<dyn Logger>,
}

impl LomsHttp {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: String, logger: Arc<dyn Logger>) -> Self {
        Self {
            transport,
            base_url,
            logger,
        }
    }

    async fn call(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, GatewayError> {
        let url = endpoint(&self.base_url, path);
        let response = self.transport.post_json(&url, &body).await?;
        self.logger
            .debug(&format!("loms {} answered {}", path, response.status));

        match response.status {
            200 => Ok(response),
            404 => Err(GatewayError::NotFound),
            _ => Err(response.into_unexpected_status()),
        }
    }
}

#[async_trait]
impl StockService for LomsHttp {
    async fn get_available_stock(&self, sku: Sku) -> Result<u64, GatewayError> {
        let response = self
            .call("stock/info", json!({ "sku": sku.value() }))
            .await?;
        let stock: StockInfoResponse = response.json()?;
        Ok(stock.count)
    }
}

#[async_trait]
impl OrderService for LomsHttp {
    async fn create_order(
        &self,
        user_id: UserId,
        items: Vec<OrderItem>,
    ) -> Result<OrderId, GatewayError> {
        let items: Vec<serde_json::Value> = items
            .iter()
            .map(|item| json!({ "sku": item.sku.value(), "count": item.count }))
            .collect();

        let response = self
            .call(
                "order/create",
                json!({ "user": user_id.value(), "items": items }),
            )
            .await?;
        let created: OrderCreateResponse = response.json()?;

        self.logger.info(&format!(
            "order {} created for user {}",
            created.order_id, user_id
        ));
        Ok(created.order_id)
    }

    async fn get_order_info(&self, order_id: OrderId) -> Result<OrderInfo, GatewayError> {
        let response = self
            .call("order/info", json!({ "orderID": order_id }))
            .await?;
        let info: OrderInfoResponse = response.json()?;
        OrderInfo::try_from(info)
    }
}
