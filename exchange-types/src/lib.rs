//! # Exchange Types
//!
//! Domain types and port traits for the money exchange service.
//! This crate has ZERO external IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain` - Pure domain types (CurrencyCode, ExchangeOutcome)
//! - `ports` - Trait definitions that adapters must implement
//! - `error` - The rate-fetch failure taxonomy

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CurrencyCode, ExchangeOutcome};
pub use error::RateError;
pub use ports::RateProvider;
