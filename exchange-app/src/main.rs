//! # Exchange Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the HTTP rate provider adapter
//! - Create the exchange service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_hex::{ExchangeService, inbound::HttpServer};
use rates_client::HttpRateProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,exchange_app=debug,exchange_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting exchange server on port {}", config.port);
    tracing::info!("Using rates provider: {}", config.rates_base_url);

    // Build the outbound rate provider adapter
    let rates = HttpRateProvider::new(&config.rates_base_url);

    // Create the exchange service
    let service = ExchangeService::new(rates);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
