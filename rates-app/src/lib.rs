//! # Rates App
//!
//! Conversion-rates provider: a fixed table of rates relative to EUR,
//! served over HTTP. The exchange service consumes this as an opaque peer;
//! rates are returned as bare decimals in a plain-text body.

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

/// Units of EUR per one unit of the keyed currency.
const CONVERSION_RATES: &[(&str, f64)] = &[
    ("EUR", 1.0),
    ("USD", 0.92),
    ("GBP", 1.19),
    ("JPY", 0.0058),
    ("CAD", 0.67),
    ("RON", 0.2),
];

fn lookup(code: &str) -> Option<f64> {
    CONVERSION_RATES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, rate)| *rate)
}

/// Returns one rate as a bare decimal, or 404 for unknown codes.
async fn get_rate(Path(code): Path<String>) -> Response {
    match lookup(&code) {
        Some(rate) => rate.to_string().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Returns the whole table as a JSON object.
async fn list_rates() -> impl IntoResponse {
    let table: serde_json::Map<String, serde_json::Value> = CONVERSION_RATES
        .iter()
        .map(|(code, rate)| (code.to_string(), serde_json::json!(rate)))
        .collect();
    Json(table)
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Builds the Axum router with all routes.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/currencies", get(list_rates))
        .route("/currencies/{currency}", get(get_rate))
        .layer(TraceLayer::new_for_http())
}
