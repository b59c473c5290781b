//! Shared utilities and common functionality
//!
//! This module contains shared error handling and logging that are
//! used across the gateway.

pub mod error;
pub mod logging;

pub use error::{GatewayError, GatewayResult};
pub use logging::LoggingUtils;
