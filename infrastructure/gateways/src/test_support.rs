use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use business::domain::errors::GatewayError;
use business::domain::logger::Logger;

use crate::transport::{HttpResponse, HttpTransport};

mock! {
    pub Transport {}

    #[async_trait]
    impl HttpTransport for Transport {
        async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, GatewayError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}
