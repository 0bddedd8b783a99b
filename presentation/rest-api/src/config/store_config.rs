use persistence::cart::repository::CartRepositoryInMemory;

use super::env::optional;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub shards: usize,
}

impl StoreConfig {
    /// CART_STORE_SHARDS: number of independently locked cart partitions (default: 16)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            shards: optional("CART_STORE_SHARDS", CartRepositoryInMemory::DEFAULT_SHARDS)?,
        })
    }
}
