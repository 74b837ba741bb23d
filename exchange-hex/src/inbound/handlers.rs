//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use exchange_types::{CurrencyCode, ExchangeOutcome, RateProvider};

use crate::ExchangeService;

/// Fixed body returned on both Timeout and Failure. The typo is part of the
/// contract - downstream checks match on the exact text.
pub const APOLOGY_BODY: &str = "Ooops! There was an error oun our side!";

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: ExchangeService<P>,
}

/// Query parameters for the exchange endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct ExchangeParams {
    pub value: f64,
    pub currency: String,
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Converts `value` units of `currency` into EUR.
///
/// Timeout and Failure render the same apology body but keep distinct
/// status codes (504 vs 500) so monitoring can tell them apart.
#[tracing::instrument(skip(state), fields(value = params.value, currency = %params.currency))]
pub async fn exchange<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(params): Query<ExchangeParams>,
) -> Response {
    let currency = CurrencyCode::from(params.currency);

    match state.service.exchange(params.value, &currency).await {
        ExchangeOutcome::Success { message } => (StatusCode::OK, message).into_response(),
        ExchangeOutcome::Timeout => {
            (StatusCode::GATEWAY_TIMEOUT, APOLOGY_BODY).into_response()
        }
        ExchangeOutcome::Failure => {
            (StatusCode::INTERNAL_SERVER_ERROR, APOLOGY_BODY).into_response()
        }
    }
}
