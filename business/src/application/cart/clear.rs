use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Clearing cart of user {}", params.user_id));

        let cleared = self
            .repository
            .update_existing(
                params.user_id,
                Box::new(|cart| {
                    cart.clear();
                    Ok(())
                }),
            )
            .await?;

        if cleared.is_some() {
            self.logger
                .info(&format!("Cart of user {} cleared", params.user_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{
        MockCartRepo, apply, cart_with, mock_logger, test_user_id,
    };

    #[tokio::test]
    async fn should_empty_existing_cart() {
        let mut repo = MockCartRepo::new();
        repo.expect_update_existing().times(1).returning(|_, mutation| {
            let cart = apply(&cart_with(&[(10, 2, 100), (20, 1, 50)]), mutation)?;
            assert!(cart.is_empty());
            assert_eq!(cart.total_price(), 0);
            Ok(Some(cart))
        });

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ClearCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_when_cart_does_not_exist() {
        let mut repo = MockCartRepo::new();
        repo.expect_update_existing().returning(|_, _| Ok(None));

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ClearCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
    }
}
