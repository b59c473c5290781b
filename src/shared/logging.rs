//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{error, info};

/// Logging utilities for the gateway
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| crate::shared::error::GatewayError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log an outgoing API request with structured data
    pub fn log_request(request_id: &str, command: &str, field_names: &[&str]) {
        info!(
            request_id = %request_id,
            command = %command,
            fields = ?field_names,
            "Dispatching API request"
        );
    }

    /// Log the raw payload returned by the upstream API
    pub fn log_response(request_id: &str, command: &str, payload: &Value) {
        info!(
            request_id = %request_id,
            command = %command,
            payload = %payload,
            "Received API response"
        );
    }

    /// Log a failed API call
    pub fn log_error(request_id: &str, command: &str, error: &crate::shared::error::GatewayError) {
        error!(
            request_id = %request_id,
            command = %command,
            error = %error,
            "API call failed"
        );
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        format!("req_{:x}", now)
    }
}
