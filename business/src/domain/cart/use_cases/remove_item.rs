use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::{Sku, UserId};

pub struct RemoveItemParams {
    pub user_id: UserId,
    pub sku: Sku,
}

#[async_trait]
pub trait RemoveItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveItemParams) -> Result<(), CartError>;
}
