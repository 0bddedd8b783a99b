use poem_openapi::Object;

use business::domain::cart::model::{Cart, LineItem};
use business::domain::order::model::OrderId;

#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Units to add (must be greater than zero)
    pub count: u16,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Product SKU
    pub sku: u32,
    /// Units in the cart
    pub count: u16,
    /// Unit price captured when the SKU was first added
    pub price: u32,
}

impl From<&LineItem> for CartItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            sku: item.sku.value(),
            count: item.quantity,
            price: item.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Lines in insertion order
    pub items: Vec<CartItemResponse>,
    /// Sum of price × count over all lines
    pub total_price: u64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            total_price: cart.total_price(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    /// Identifier assigned by the order service
    pub order_id: OrderId,
}
