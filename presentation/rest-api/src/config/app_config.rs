use super::{
    http_client_config::HttpClientConfig, loms_config::LomsConfig,
    product_service_config::ProductServiceConfig, server_config::ServerConfig,
    store_config::StoreConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub product_service: ProductServiceConfig,
    pub loms: LomsConfig,
    pub http_client: HttpClientConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            product_service: ProductServiceConfig::from_env()?,
            loms: LomsConfig::from_env()?,
            http_client: HttpClientConfig::from_env()?,
            store: StoreConfig::from_env()?,
        })
    }
}
