use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use crate::domain::logger::Logger;
use crate::domain::order::model::{OrderId, OrderItem};
use crate::domain::order::services::OrderService;

/// Turns a cart into a remote order.
///
/// Order creation and the status check are two independent remote calls with no
/// compensation: if the status check fails, the order may exist upstream while the
/// cart stays untouched. Once the order is known not to have failed, exactly the
/// ordered units are taken out of the cart; lines added meanwhile are kept.
pub struct CheckoutUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub orders: Arc<dyn OrderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<OrderId, CartError> {
        let user_id = params.user_id;
        self.logger
            .info(&format!("Checking out cart of user {}", user_id));

        let cart = self.repository.get(user_id).await?;
        if cart.is_empty() {
            return Err(CartError::CartEmpty);
        }

        let items: Vec<OrderItem> = cart
            .items()
            .iter()
            .map(|item| OrderItem {
                sku: item.sku,
                count: item.quantity,
            })
            .collect();

        let order_id = self
            .orders
            .create_order(user_id, items.clone())
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Order creation for user {} failed: {}", user_id, e));
                CartError::DownstreamUnavailable(e)
            })?;

        let info = self
            .orders
            .get_order_info(order_id)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Order {} status lookup failed: {}", order_id, e));
                CartError::DownstreamUnavailable(e)
            })?;

        if info.status.is_failed() {
            self.logger.warn(&format!(
                "Order {} for user {} failed, keeping cart",
                order_id, user_id
            ));
            return Err(CartError::OrderFailed { order_id });
        }

        self.repository
            .update_existing(
                user_id,
                Box::new(move |cart| {
                    for item in &items {
                        cart.deduct(item.sku, item.count);
                    }
                    Ok(())
                }),
            )
            .await?;

        self.logger.info(&format!(
            "Order {} created for user {} with status {}",
            order_id, user_id, info.status
        ));
        Ok(order_id)
    }
}
