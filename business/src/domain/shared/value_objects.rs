use serde::{Deserialize, Serialize};

use crate::domain::cart::errors::CartError;

/// Identifies the owner of a cart. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Result<Self, CartError> {
        if id <= 0 {
            return Err(CartError::InvalidUserId);
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for UserId {
    type Error = CartError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

/// Stock keeping unit, the product identifier shared with the catalog and stock services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sku(u32);

impl Sku {
    pub fn new(sku: u32) -> Result<Self, CartError> {
        if sku == 0 {
            return Err(CartError::InvalidSku);
        }
        Ok(Self(sku))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Sku {
    type Error = CartError;

    fn try_from(sku: u32) -> Result<Self, Self::Error> {
        Self::new(sku)
    }
}
