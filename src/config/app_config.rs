//! Gateway configuration structures
//!
//! This module contains the main configuration structures for the gateway.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Upstream payment API configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    /// Versioned API base URL
    #[validate(url)]
    pub base_url: String,

    /// Public API key, sent as the `key` query parameter
    #[validate(length(min = 1))]
    pub public_key: String,

    /// Account username
    #[validate(length(min = 1))]
    pub username: String,

    /// Account password
    #[validate(length(min = 1))]
    pub password: String,

    /// Response format requested from the API
    #[validate(length(min = 1))]
    pub format: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,

    /// Verify the upstream TLS certificate. Disabling this is an explicit,
    /// logged opt-out intended for test endpoints only.
    pub verify_tls: bool,
}

/// Instant payment notification configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IpnConfig {
    /// Shared secret used to verify IPN signatures
    #[validate(length(min = 32))]
    pub secret_key: String,

    /// IPN callback URL handed to deposit transactions
    #[validate(url)]
    pub deposit_url: String,

    /// IPN callback URL handed to withdrawals
    #[validate(url)]
    pub withdrawal_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CacheConfig {
    /// Enable caching
    pub enabled: bool,

    /// Redis connection URL
    #[validate(url)]
    pub redis_url: String,

    /// Maximum in-memory cache size in bytes
    #[validate(range(min = 1024, max = 1073741824))] // 1KB to 1GB
    pub max_size: usize,
}

/// Gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Upstream API configuration
    pub api: ApiConfig,

    /// IPN configuration
    pub ipn: IpnConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Cache configuration
    pub cache: CacheConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://imsba.com/api/v2/crypto".to_string(),
                public_key: "your-public-key".to_string(),
                username: "username".to_string(),
                password: "password".to_string(),
                format: "json".to_string(),
                timeout_seconds: 30,
                verify_tls: true,
            },
            ipn: IpnConfig {
                secret_key: "your-ipn-secret-key-that-should-be-32-chars-min".to_string(),
                deposit_url: "https://shop.example.com/webhook/deposits/ipn".to_string(),
                withdrawal_url: "https://shop.example.com/webhook/withdrawals/ipn".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            cache: CacheConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            redis_url: "redis://127.0.0.1:6379".to_string(),
            max_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl GatewayConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("Gateway").required(false))
            .add_source(config::Environment::with_prefix("FILLBITS").separator("__"))
            .build()
            .map_err(|e| crate::shared::error::GatewayError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: GatewayConfig = config.try_deserialize()
            .map_err(|e| crate::shared::error::GatewayError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()
            .map_err(|e| crate::shared::error::GatewayError::Validation(format!("Configuration validation failed: {}", e)))?;

        crate::config::ConfigValidator::validate_config(&config)?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.api.validate()?;
        self.ipn.validate()?;
        self.logging.validate()?;
        self.cache.validate()?;

        Ok(())
    }
}
