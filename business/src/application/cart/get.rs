use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Fetching cart of user {}", params.user_id));

        let cart = self.repository.get(params.user_id).await?;

        // An emptied cart reads the same as a missing one.
        if cart.is_empty() {
            return Err(CartError::CartNotFound);
        }

        Ok(cart)
    }
}
