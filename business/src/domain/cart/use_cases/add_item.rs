use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{Sku, UserId};

pub struct AddItemParams {
    pub user_id: UserId,
    pub sku: Sku,
    pub quantity: u16,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<Cart, CartError>;
}
