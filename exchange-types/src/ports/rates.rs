//! Rate provider port.
//!
//! This trait defines the interface for upstream conversion-rate sources.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::{CurrencyCode, RateError};

/// Port trait for conversion-rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the current rate for one currency, fresh for this call.
    ///
    /// Returns how many units of the reference currency one unit of
    /// `currency` is worth. Exactly one outbound call per invocation;
    /// implementations must not retry or cache.
    async fn fetch_rate(&self, currency: &CurrencyCode) -> Result<f64, RateError>;
}
