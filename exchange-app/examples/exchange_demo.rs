//! End-to-end demo: spins up the rates provider and the exchange server
//! in-process, then exercises the /exchanges endpoint.
//!
//! Run with: cargo run -p exchange-app --example exchange_demo

use std::net::SocketAddr;

use exchange_hex::{ExchangeService, inbound::HttpServer};
use rates_client::HttpRateProvider;
use tokio::net::TcpListener;

async fn spawn_router(router: axum::Router) -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });
    Ok(addr)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Start the conversion-rates provider
    let rates_addr = spawn_router(rates_app::router()).await?;
    println!("Rates provider running on http://{rates_addr}");

    // Start the exchange server pointed at it
    let rates = HttpRateProvider::new(format!("http://{rates_addr}"));
    let service = ExchangeService::new(rates);
    let exchange_addr = spawn_router(HttpServer::new(service).router()).await?;
    println!("Exchange server running on http://{exchange_addr}");

    let client = reqwest::Client::new();

    for (value, currency) in [("100.0", "USD"), ("250.0", "GBP"), ("42.5", "RON")] {
        let response = client
            .get(format!(
                "http://{exchange_addr}/exchanges?value={value}&currency={currency}"
            ))
            .send()
            .await?;
        println!("{} -> {}", response.status(), response.text().await?);
    }

    // An unknown currency surfaces as a failure, never a defaulted rate
    let response = client
        .get(format!(
            "http://{exchange_addr}/exchanges?value=10&currency=DOGE"
        ))
        .send()
        .await?;
    println!("{} -> {}", response.status(), response.text().await?);

    Ok(())
}
