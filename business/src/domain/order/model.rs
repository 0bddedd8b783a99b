use crate::domain::shared::value_objects::{Sku, UserId};

pub type OrderId = i64;

/// A line submitted to the order service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub sku: Sku,
    pub count: u16,
}

/// Order state as reported by the order service. Unknown states are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    New,
    AwaitingPayment,
    Failed,
    Payed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// Whether the order service gave up on the order (for example, stock ran out at reservation time).
    pub fn is_failed(&self) -> bool {
        matches!(self, OrderStatus::Failed)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::New => write!(f, "new"),
            OrderStatus::AwaitingPayment => write!(f, "awaiting payment"),
            OrderStatus::Failed => write!(f, "failed"),
            OrderStatus::Payed => write!(f, "payed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "new" => OrderStatus::New,
            "awaiting payment" | "awaiting_payment" => OrderStatus::AwaitingPayment,
            "failed" => OrderStatus::Failed,
            "payed" | "paid" => OrderStatus::Payed,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(s.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInfo {
    pub status: OrderStatus,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
}
