//! Error handling module
//!
//! This module provides centralized error handling for the gateway.

use thiserror::Error;

/// Gateway error types
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Command not supported: {command}")]
    CommandNotSupported { command: String },

    #[error("Missing required field for {command}: {field}")]
    MissingRequiredField { command: String, field: String },

    #[error("Invalid field for {command}: {reason}")]
    InvalidField { command: String, reason: String },

    #[error("Unsupported HTTP method for field-bearing request: {method}")]
    UnsupportedMethod { method: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Whether the error was detected before any network traffic
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            GatewayError::Validation(_)
                | GatewayError::CommandNotSupported { .. }
                | GatewayError::MissingRequiredField { .. }
                | GatewayError::InvalidField { .. }
                | GatewayError::UnsupportedMethod { .. }
        )
    }

    /// Whether the error came back from the payment API itself
    pub fn is_upstream(&self) -> bool {
        matches!(self, GatewayError::Upstream(_))
    }
}

/// Gateway result type
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<config::ConfigError> for GatewayError {
    fn from(err: config::ConfigError) -> Self {
        GatewayError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

impl From<validator::ValidationErrors> for GatewayError {
    fn from(err: validator::ValidationErrors) -> Self {
        GatewayError::Validation(err.to_string())
    }
}
