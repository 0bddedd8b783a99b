use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::{CartMutation, CartRepository};
use crate::domain::errors::{GatewayError, RepositoryError};
use crate::domain::logger::Logger;
use crate::domain::order::model::{OrderId, OrderInfo, OrderItem};
use crate::domain::order::services::{OrderService, StockService};
use crate::domain::product::model::Product;
use crate::domain::product::services::ProductCatalogService;
use crate::domain::shared::value_objects::{Sku, UserId};

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn create(&self, user_id: UserId) -> Result<Cart, RepositoryError>;
        async fn get(&self, user_id: UserId) -> Result<Cart, RepositoryError>;
        async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        async fn delete(&self, user_id: UserId) -> Result<(), RepositoryError>;
        async fn upsert_with(&self, user_id: UserId, mutation: CartMutation) -> Result<Cart, CartError>;
        async fn update_existing(&self, user_id: UserId, mutation: CartMutation) -> Result<Option<Cart>, CartError>;
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl ProductCatalogService for Catalog {
        async fn get_product(&self, sku: Sku) -> Result<Product, GatewayError>;
    }
}

mock! {
    pub Stock {}

    #[async_trait]
    impl StockService for Stock {
        async fn get_available_stock(&self, sku: Sku) -> Result<u64, GatewayError>;
    }
}

mock! {
    pub Orders {}

    #[async_trait]
    impl OrderService for Orders {
        async fn create_order(&self, user_id: UserId, items: Vec<OrderItem>) -> Result<OrderId, GatewayError>;
        async fn get_order_info(&self, order_id: OrderId) -> Result<OrderInfo, GatewayError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn test_user_id() -> UserId {
    UserId::new(1001).unwrap()
}

pub fn sku(value: u32) -> Sku {
    Sku::new(value).unwrap()
}

pub fn product(sku_value: u32, price: u32) -> Product {
    Product {
        sku: sku(sku_value),
        name: format!("Product {}", sku_value),
        price,
    }
}

/// Cart for `test_user_id` holding the given `(sku, quantity, price)` lines.
pub fn cart_with(lines: &[(u32, u16, u32)]) -> Cart {
    let mut cart = Cart::new(test_user_id());
    for &(sku_value, quantity, price) in lines {
        cart.add_line(sku(sku_value), quantity, price).unwrap();
    }
    cart
}

/// Runs a mutation the way the store does: on a copy, returned only when it succeeds.
pub fn apply(cart: &Cart, mutation: CartMutation) -> Result<Cart, CartError> {
    let mut working = cart.clone();
    mutation(&mut working)?;
    Ok(working)
}
