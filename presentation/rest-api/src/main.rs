use anyhow::Context;
use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod env;
    pub mod http_client_config;
    pub mod loms_config;
    pub mod product_service_config;
    pub mod server_config;
    pub mod store_config;
}

mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Cart service entry point
///
/// Initializes tracing, loads configuration from the environment (and `.env`),
/// wires the in-memory store and HTTP gateways into the cart use cases, and
/// serves the API until Ctrl-C.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env().context("invalid configuration")?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
