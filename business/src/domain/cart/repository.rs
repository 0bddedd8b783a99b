use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::errors::CartError;
use super::model::Cart;

/// A business mutation applied to a cart while the store holds its lock.
///
/// Must not block or perform I/O. Returning an error discards every change.
pub type CartMutation = Box<dyn FnOnce(&mut Cart) -> Result<(), CartError> + Send>;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Inserts an empty cart. Fails with `AlreadyExists` when the user already has one.
    async fn create(&self, user_id: UserId) -> Result<Cart, RepositoryError>;
    /// Returns a snapshot of the user's cart.
    async fn get(&self, user_id: UserId) -> Result<Cart, RepositoryError>;
    /// Unconditional upsert.
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn delete(&self, user_id: UserId) -> Result<(), RepositoryError>;
    /// Applies `mutation` atomically, starting from an empty cart when the user has none.
    /// Nothing is stored when the mutation fails.
    async fn upsert_with(&self, user_id: UserId, mutation: CartMutation)
    -> Result<Cart, CartError>;
    /// Applies `mutation` atomically to an existing cart. Returns `None` when there is no cart.
    async fn update_existing(
        &self,
        user_id: UserId,
        mutation: CartMutation,
    ) -> Result<Option<Cart>, CartError>;
}
