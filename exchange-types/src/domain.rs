//! Pure domain types for the exchange calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller-supplied currency identifier, e.g. "USD".
///
/// Codes are passed through verbatim - whether a code is known is the
/// upstream rate provider's concern, so no local allow-list is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The result of one exchange calculation.
///
/// Produced exactly once per request and consumed immediately by the HTTP
/// adapter - never stored. `Timeout` is kept separate from `Failure` so the
/// adapter can map "upstream took too long" to a different status code than
/// "something else went wrong"; the rendered body is identical for both.
#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeOutcome {
    /// Conversion succeeded; `message` is the human-readable result line.
    Success { message: String },
    /// The rate fetch deadline elapsed before a response arrived.
    Timeout,
    /// Any other problem: unparseable upstream body, transport error,
    /// or unexpected internal error.
    Failure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_display() {
        let code = CurrencyCode::from("USD");
        assert_eq!(code.to_string(), "USD");
        assert_eq!(code.as_str(), "USD");
    }

    #[test]
    fn test_currency_code_passes_through_unknown_codes() {
        // No validation here - unknown codes are the provider's concern.
        let code = CurrencyCode::from("doge");
        assert_eq!(code.as_str(), "doge");
    }
}
