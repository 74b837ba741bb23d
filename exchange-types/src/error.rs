//! Rate-fetch failure taxonomy.

/// Errors a `RateProvider` implementation can surface.
///
/// The fetcher keeps all three kinds distinguishable; the calculator
/// collapses everything except `DeadlineExceeded` into the outward-facing
/// `Failure` outcome. That narrowing happens at the service layer, not here.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("rate request exceeded its deadline")]
    DeadlineExceeded,

    #[error("malformed rate response: {0:?}")]
    MalformedResponse(String),

    #[error("transport error: {0}")]
    Transport(String),
}
