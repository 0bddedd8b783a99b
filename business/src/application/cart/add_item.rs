use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::order::services::StockService;
use crate::domain::product::services::ProductCatalogService;

pub struct AddItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalogService>,
    pub stock: Arc<dyn StockService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<Cart, CartError> {
        let AddItemParams {
            user_id,
            sku,
            quantity,
        } = params;

        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        self.logger.info(&format!(
            "Adding {} x sku {} to cart of user {}",
            quantity, sku, user_id
        ));

        let product = self
            .catalog
            .get_product(sku)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound => {
                    self.logger.warn(&format!("Product {} not found", sku));
                    CartError::ProductNotFound
                }
                other => {
                    self.logger
                        .error(&format!("Product lookup for sku {} failed: {}", sku, other));
                    CartError::DownstreamUnavailable(other)
                }
            })?;

        let available = self.stock.get_available_stock(sku).await.map_err(|e| {
            self.logger
                .error(&format!("Stock inquiry for sku {} failed: {}", sku, e));
            CartError::DownstreamUnavailable(e)
        })?;

        // Stock is checked against what the user would hold after this add, under the cart lock.
        let price = product.price;
        let result = self
            .repository
            .upsert_with(
                user_id,
                Box::new(move |cart| {
                    let requested = u64::from(cart.quantity_of(sku)) + u64::from(quantity);
                    if requested > available {
                        return Err(CartError::InsufficientStock {
                            sku,
                            requested,
                            available,
                        });
                    }
                    cart.add_line(sku, quantity, price)
                }),
            )
            .await;

        match result {
            Ok(cart) => {
                self.logger.info(&format!(
                    "Cart of user {} now holds {} x sku {} (total {})",
                    user_id,
                    cart.quantity_of(sku),
                    sku,
                    cart.total_price()
                ));
                Ok(cart)
            }
            Err(err @ CartError::InsufficientStock { .. }) => {
                self.logger.warn(&format!(
                    "Rejected add of {} x sku {} for user {}: only {} in stock",
                    quantity, sku, user_id, available
                ));
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{
        MockCartRepo, MockCatalog, MockStock, apply, cart_with, mock_logger, product, sku,
        test_user_id,
    };

    fn use_case(repo: MockCartRepo, catalog: MockCatalog, stock: MockStock) -> AddItemUseCaseImpl {
        AddItemUseCaseImpl {
            repository: Arc::new(repo),
            catalog: Arc::new(catalog),
            stock: Arc::new(stock),
            logger: mock_logger(),
        }
    }

    fn params(sku_value: u32, quantity: u16) -> AddItemParams {
        AddItemParams {
            user_id: test_user_id(),
            sku: sku(sku_value),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_create_cart_on_first_add() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_product()
            .returning(|_| Ok(product(1076963, 3379)));
        let mut stock = MockStock::new();
        stock.expect_get_available_stock().returning(|_| Ok(10));
        let mut repo = MockCartRepo::new();
        repo.expect_upsert_with()
            .times(1)
            .returning(|_, mutation| apply(&cart_with(&[]), mutation));

        let result = use_case(repo, catalog, stock)
            .execute(params(1076963, 2))
            .await;

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(sku(1076963)), 2);
        assert_eq!(cart.total_price(), 6758);
    }

    #[tokio::test]
    async fn should_merge_into_existing_line() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_product().returning(|_| Ok(product(10, 100)));
        let mut stock = MockStock::new();
        stock.expect_get_available_stock().returning(|_| Ok(10));
        let mut repo = MockCartRepo::new();
        repo.expect_upsert_with()
            .returning(|_, mutation| apply(&cart_with(&[(10, 4, 100)]), mutation));

        let cart = use_case(repo, catalog, stock)
            .execute(params(10, 3))
            .await
            .unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(sku(10)), 7);
        assert_eq!(cart.total_price(), 700);
    }

    #[tokio::test]
    async fn should_reject_when_cumulative_quantity_exceeds_stock() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_product().returning(|_| Ok(product(10, 100)));
        let mut stock = MockStock::new();
        stock.expect_get_available_stock().returning(|_| Ok(5));
        let mut repo = MockCartRepo::new();
        repo.expect_upsert_with()
            .returning(|_, mutation| apply(&cart_with(&[(10, 3, 100)]), mutation));

        let result = use_case(repo, catalog, stock)
            .execute(params(10, 3))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::InsufficientStock {
                requested: 6,
                available: 5,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn should_return_product_not_found_without_touching_cart() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_product()
            .returning(|_| Err(GatewayError::NotFound));
        let mut stock = MockStock::new();
        stock.expect_get_available_stock().never();
        let mut repo = MockCartRepo::new();
        repo.expect_upsert_with().never();

        let result = use_case(repo, catalog, stock).execute(params(10, 1)).await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_surface_catalog_outage_as_downstream_unavailable() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_product()
            .returning(|_| Err(GatewayError::unexpected_status(429, "")));
        let mut repo = MockCartRepo::new();
        repo.expect_upsert_with().never();

        let result = use_case(repo, catalog, MockStock::new())
            .execute(params(10, 1))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::DownstreamUnavailable(GatewayError::UnexpectedStatus { status: 429, .. })
        ));
    }

    #[tokio::test]
    async fn should_propagate_stock_inquiry_failure() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_product().returning(|_| Ok(product(10, 100)));
        let mut stock = MockStock::new();
        stock
            .expect_get_available_stock()
            .returning(|_| Err(GatewayError::Timeout));
        let mut repo = MockCartRepo::new();
        repo.expect_upsert_with().never();

        let result = use_case(repo, catalog, stock).execute(params(10, 1)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::DownstreamUnavailable(GatewayError::Timeout)
        ));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity_before_any_call() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_product().never();

        let result = use_case(MockCartRepo::new(), catalog, MockStock::new())
            .execute(params(10, 0))
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }
}
