//! # Rates Client
//!
//! `reqwest`-based outbound adapter for the conversion-rates API.
//!
//! Implements the `RateProvider` port: one `GET /currencies/<code>` per
//! call with a fixed deadline, body parsed as a bare decimal. No retries,
//! no caching - a request that times out is simply reported as such.

use std::time::Duration;

use exchange_types::{CurrencyCode, RateError, RateProvider};
use reqwest::Client;

/// Per-request deadline for the upstream rate call.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(2);

/// HTTP implementation of the `RateProvider` port.
pub struct HttpRateProvider {
    base_url: String,
    deadline: Duration,
    http: Client,
}

impl HttpRateProvider {
    /// Creates a new provider against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            deadline: DEFAULT_DEADLINE,
            http: Client::new(),
        }
    }

    /// Overrides the per-request deadline. Production wiring keeps
    /// [`DEFAULT_DEADLINE`]; tests shorten it.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    fn classify(err: reqwest::Error) -> RateError {
        if err.is_timeout() {
            RateError::DeadlineExceeded
        } else {
            RateError::Transport(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl RateProvider for HttpRateProvider {
    async fn fetch_rate(&self, currency: &CurrencyCode) -> Result<f64, RateError> {
        let url = format!("{}/currencies/{}", self.base_url, currency);

        let response = self
            .http
            .get(&url)
            .timeout(self.deadline)
            .send()
            .await
            .map_err(Self::classify)?;

        // The status line is deliberately not inspected: whatever body comes
        // back either parses as a decimal or the response is malformed. An
        // upstream 404 for an unknown code falls out as a failure here
        // rather than silently defaulting to a rate.
        let body = response.text().await.map_err(Self::classify)?;

        body.trim().parse::<f64>().map_err(|_| {
            tracing::debug!(%currency, body = %body, "unparseable rate body");
            RateError::MalformedResponse(body)
        })
    }
}
