//! Configuration management module
//!
//! This module handles all configuration concerns including loading,
//! validation, and providing access to gateway settings.

pub mod app_config;
pub mod validation;

pub use app_config::{ApiConfig, CacheConfig, GatewayConfig, IpnConfig, LoggingConfig};
pub use validation::ConfigValidator;
