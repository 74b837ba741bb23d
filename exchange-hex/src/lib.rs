//! # Exchange Hex
//!
//! Application service layer and HTTP adapter for the money exchange service.
//!
//! ## Architecture
//!
//! - `service` - Application service (the exchange calculator)
//! - `inbound` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: RateProvider`, allowing
//! different rate sources to be injected.

pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::ExchangeService;
