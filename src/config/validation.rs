//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::GatewayConfig;
use crate::shared::error::GatewayError;

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &GatewayConfig) -> crate::Result<()> {
        Self::validate_api_url(&config.api.base_url)?;
        Self::validate_tls(config)?;
        Self::validate_format(&config.api.format)?;

        Ok(())
    }

    /// Validate the API base URL
    fn validate_api_url(url: &str) -> crate::Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(GatewayError::Validation(
                "API base URL must start with http:// or https://".to_string()
            ));
        }

        if url.contains("localhost") || url.contains("127.0.0.1") {
            // Allow localhost for development
            Ok(())
        } else {
            // For production, ensure HTTPS
            if !url.starts_with("https://") {
                return Err(GatewayError::Validation(
                    "Production API base URL must use HTTPS".to_string()
                ));
            }
            Ok(())
        }
    }

    /// Warn loudly when certificate verification is switched off
    fn validate_tls(config: &GatewayConfig) -> crate::Result<()> {
        if !config.api.verify_tls {
            tracing::warn!(
                base_url = %config.api.base_url,
                "TLS certificate verification is DISABLED - responses can be forged in transit"
            );
        }
        Ok(())
    }

    /// Validate the requested response format
    fn validate_format(format: &str) -> crate::Result<()> {
        if format != "json" {
            return Err(GatewayError::Validation(format!(
                "Invalid response format '{}'. Please use \"json\" as a format value",
                format
            )));
        }
        Ok(())
    }
}
