//! ExchangeService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use async_trait::async_trait;

    use exchange_types::{CurrencyCode, ExchangeOutcome, RateError, RateProvider};

    use crate::ExchangeService;

    /// Scripted provider for testing the service layer.
    pub enum MockRates {
        Rate(f64),
        TimedOut,
        Malformed,
        Unreachable,
    }

    #[async_trait]
    impl RateProvider for MockRates {
        async fn fetch_rate(&self, _currency: &CurrencyCode) -> Result<f64, RateError> {
            match self {
                MockRates::Rate(rate) => Ok(*rate),
                MockRates::TimedOut => Err(RateError::DeadlineExceeded),
                MockRates::Malformed => Err(RateError::MalformedResponse(
                    "Wrong response, definitely not a number!".into(),
                )),
                MockRates::Unreachable => {
                    Err(RateError::Transport("connection refused".into()))
                }
            }
        }
    }

    #[tokio::test]
    async fn test_success_message_shape() {
        let service = ExchangeService::new(MockRates::Rate(0.92));

        let outcome = service.exchange(100.0, &"USD".into()).await;

        assert_eq!(
            outcome,
            ExchangeOutcome::Success {
                message: "Exchanging 100 USD at a rate of 0.92 will give you 92 EUR".into()
            }
        );
    }

    #[tokio::test]
    async fn test_converted_value_is_plain_multiplication() {
        let service = ExchangeService::new(MockRates::Rate(1.19));

        let outcome = service.exchange(3.0, &"GBP".into()).await;

        // No rounding step: the message carries whatever f64 arithmetic
        // produced, rendered by the default Display impl.
        let expected = 3.0_f64 * 1.19;
        assert_eq!(
            outcome,
            ExchangeOutcome::Success {
                message: format!("Exchanging 3 GBP at a rate of 1.19 will give you {expected} EUR")
            }
        );
    }

    #[tokio::test]
    async fn test_negative_amounts_pass_through_arithmetically() {
        let service = ExchangeService::new(MockRates::Rate(0.5));

        let outcome = service.exchange(-2.0, &"USD".into()).await;

        assert_eq!(
            outcome,
            ExchangeOutcome::Success {
                message: "Exchanging -2 USD at a rate of 0.5 will give you -1 EUR".into()
            }
        );
    }

    #[tokio::test]
    async fn test_deadline_error_becomes_timeout_outcome() {
        let service = ExchangeService::new(MockRates::TimedOut);

        let outcome = service.exchange(100.0, &"USD".into()).await;
        assert_eq!(outcome, ExchangeOutcome::Timeout);
    }

    #[tokio::test]
    async fn test_malformed_response_collapses_into_failure() {
        let service = ExchangeService::new(MockRates::Malformed);

        let outcome = service.exchange(100.0, &"USD".into()).await;
        assert_eq!(outcome, ExchangeOutcome::Failure);
    }

    #[tokio::test]
    async fn test_transport_error_collapses_into_failure() {
        let service = ExchangeService::new(MockRates::Unreachable);

        let outcome = service.exchange(100.0, &"USD".into()).await;
        assert_eq!(outcome, ExchangeOutcome::Failure);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_idempotent() {
        let service = ExchangeService::new(MockRates::Rate(0.2));

        let first = service.exchange(50.0, &"RON".into()).await;
        let second = service.exchange(50.0, &"RON".into()).await;

        assert_eq!(first, second);
    }
}
