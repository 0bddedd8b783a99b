use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::repository::{CartMutation, CartRepository};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

type Shard = RwLock<HashMap<UserId, Cart>>;

/// Volatile cart store, sharded by user id.
///
/// Each shard has its own lock, so users on different shards never contend.
/// Locks are only held for the map access plus the (synchronous) mutation.
pub struct CartRepositoryInMemory {
    shards: Vec<Shard>,
}

impl CartRepositoryInMemory {
    pub const DEFAULT_SHARDS: usize = 16;

    pub fn new() -> Self {
        Self::with_shards(Self::DEFAULT_SHARDS)
    }

    pub fn with_shards(count: usize) -> Self {
        let shards = (0..count.max(1))
            .map(|_| RwLock::new(HashMap::new()))
            .collect();
        Self { shards }
    }

    /// Number of carts currently held, empty ones included.
    pub async fn len(&self) -> usize {
        let mut total = 0;
        for shard in &self.shards {
            total += shard.read().await.len();
        }
        total
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn shard(&self, user_id: UserId) -> &Shard {
        let index = user_id.value().unsigned_abs() % self.shards.len() as u64;
        &self.shards[index as usize]
    }
}

impl Default for CartRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn create(&self, user_id: UserId) -> Result<Cart, RepositoryError> {
        let mut shard = self.shard(user_id).write().await;
        if shard.contains_key(&user_id) {
            return Err(RepositoryError::already_exists());
        }

        let cart = Cart::new(user_id);
        shard.insert(user_id, cart.clone());
        Ok(cart)
    }

    async fn get(&self, user_id: UserId) -> Result<Cart, RepositoryError> {
        self.shard(user_id)
            .read()
            .await
            .get(&user_id)
            .cloned()
            .ok_or(RepositoryError::not_found())
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        self.shard(cart.user_id())
            .write()
            .await
            .insert(cart.user_id(), cart.clone());
        Ok(())
    }

    async fn delete(&self, user_id: UserId) -> Result<(), RepositoryError> {
        self.shard(user_id)
            .write()
            .await
            .remove(&user_id)
            .map(|_| ())
            .ok_or(RepositoryError::not_found())
    }

    async fn upsert_with(
        &self,
        user_id: UserId,
        mutation: CartMutation,
    ) -> Result<Cart, CartError> {
        let mut shard = self.shard(user_id).write().await;
        let mut working = shard
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| Cart::new(user_id));

        mutation(&mut working)?;

        shard.insert(user_id, working.clone());
        Ok(working)
    }

    async fn update_existing(
        &self,
        user_id: UserId,
        mutation: CartMutation,
    ) -> Result<Option<Cart>, CartError> {
        let mut shard = self.shard(user_id).write().await;
        let Some(existing) = shard.get(&user_id) else {
            return Ok(None);
        };
        let mut working = existing.clone();

        mutation(&mut working)?;

        shard.insert(user_id, working.clone());
        Ok(Some(working))
    }
}
