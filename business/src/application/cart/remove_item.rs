use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> Result<(), CartError> {
        let RemoveItemParams { user_id, sku } = params;
        self.logger.info(&format!(
            "Removing sku {} from cart of user {}",
            sku, user_id
        ));

        let updated = self
            .repository
            .update_existing(
                user_id,
                Box::new(move |cart| {
                    cart.remove_line(sku);
                    Ok(())
                }),
            )
            .await?;

        // A missing cart is not an error: removal is idempotent.
        if updated.is_none() {
            self.logger
                .debug(&format!("User {} has no cart, nothing to remove", user_id));
        }
        Ok(())
    }
}
