//! Exchange Application Service
//!
//! Orchestrates one rate fetch per request through the `RateProvider` port
//! and classifies the result. Contains NO transport logic.

use exchange_types::{CurrencyCode, ExchangeOutcome, RateError, RateProvider};

/// Application service for exchange calculations.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping rate sources without code changes
/// - Testing with a scripted in-memory provider
/// - Compile-time checks for port implementation
pub struct ExchangeService<P: RateProvider> {
    rates: P,
}

impl<P: RateProvider> ExchangeService<P> {
    /// Creates a new exchange service with the given rate provider.
    pub fn new(rates: P) -> Self {
        Self { rates }
    }

    /// Converts `value` units of `currency` into the reference currency.
    ///
    /// Fetches a fresh rate for this call, multiplies, and formats the
    /// result line. Every rate error except a missed deadline collapses
    /// into `Failure`; the deadline case stays distinguishable so the
    /// adapter can answer with a gateway-timeout status.
    pub async fn exchange(&self, value: f64, currency: &CurrencyCode) -> ExchangeOutcome {
        match self.rates.fetch_rate(currency).await {
            Ok(rate) => {
                let converted = value * rate;
                ExchangeOutcome::Success {
                    message: format!(
                        "Exchanging {value} {currency} at a rate of {rate} will give you {converted} EUR"
                    ),
                }
            }
            Err(RateError::DeadlineExceeded) => {
                tracing::warn!(%currency, "rate fetch timed out");
                ExchangeOutcome::Timeout
            }
            Err(err) => {
                tracing::warn!(%currency, error = %err, "rate fetch failed");
                ExchangeOutcome::Failure
            }
        }
    }
}
