//! Application layer - Services orchestrating domain logic
//!
//! This module contains the payment service that ties validation,
//! execution, caching, and IPN verification together for callers.

pub mod services;

pub use services::*;
