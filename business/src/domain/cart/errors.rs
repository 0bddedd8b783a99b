use crate::domain::errors::{GatewayError, RepositoryError};
use crate::domain::order::model::OrderId;
use crate::domain::shared::value_objects::Sku;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_user_id")]
    InvalidUserId,
    #[error("cart.invalid_sku")]
    InvalidSku,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.insufficient_stock")]
    InsufficientStock {
        sku: Sku,
        requested: u64,
        available: u64,
    },
    #[error("cart.not_found")]
    CartNotFound,
    #[error("cart.already_exists")]
    CartAlreadyExists,
    #[error("cart.empty")]
    CartEmpty,
    #[error("cart.order_failed")]
    OrderFailed { order_id: OrderId },
    #[error("cart.downstream_unavailable")]
    DownstreamUnavailable(#[from] GatewayError),
}

impl From<RepositoryError> for CartError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => CartError::CartNotFound,
            RepositoryError::AlreadyExists => CartError::CartAlreadyExists,
        }
    }
}
