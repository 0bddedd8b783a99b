use std::sync::Arc;

use anyhow::Context;

use gateways::deadline::DeadlineTransport;
use gateways::loms_client::LomsHttp;
use gateways::product_client::ProductCatalogHttp;
use gateways::retry::RetryingTransport;
use gateways::transport::{HttpTransport, ReqwestTransport};
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryInMemory;

use business::application::cart::add_item::AddItemUseCaseImpl;
use business::application::cart::checkout::CheckoutUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveItemUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger::new("cart"));
        let gateway_logger = Arc::new(TracingLogger::new("gateway"));
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let repository = Arc::new(CartRepositoryInMemory::with_shards(config.store.shards));

        let transport: Arc<dyn HttpTransport> = Arc::new(
            ReqwestTransport::new(config.http_client.timeout)
                .context("failed to build HTTP client")?,
        );
        let product_transport = Arc::new(DeadlineTransport::new(
            Arc::new(RetryingTransport::new(
                transport.clone(),
                config.http_client.retry_policy(),
                gateway_logger.clone(),
            )),
            config.http_client.deadline,
            gateway_logger.clone(),
        ));
        let loms_transport = Arc::new(DeadlineTransport::new(
            transport,
            config.http_client.deadline,
            gateway_logger.clone(),
        ));

        let catalog = Arc::new(ProductCatalogHttp::new(
            product_transport,
            config.product_service.url.clone(),
            config.product_service.token.clone(),
        ));
        let loms = Arc::new(LomsHttp::new(
            loms_transport,
            config.loms.url.clone(),
            gateway_logger,
        ));

        // Cart use cases
        let add_item_use_case = Arc::new(AddItemUseCaseImpl {
            repository: repository.clone(),
            catalog,
            stock: loms.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetCartUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            repository,
            orders: loms,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            add_item_use_case,
            remove_item_use_case,
            clear_use_case,
            get_use_case,
            checkout_use_case,
        );

        Ok(Self {
            health_api,
            cart_api,
        })
    }
}
