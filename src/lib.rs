//! Fillbits Gateway - A client integration layer for the Fillbits payment API
//!
//! This library validates outgoing command parameters against per-command
//! field schemas, executes authenticated HTTP requests over a reusable
//! session, normalizes JSON responses into a single success/error result
//! shape, and verifies inbound IPN webhook signatures.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;


pub use application::services::{
    InitializePaymentRequest, InitializeWithdrawalRequest, PaymentHandle, PaymentService,
    WithdrawalReceipt,
};
pub use config::GatewayConfig;
pub use domain::{Command, FieldMap, HttpMethod, IpnVerifier, SchemaRegistry};
pub use infrastructure::http::RequestExecutor;
pub use shared::error::{GatewayError, GatewayResult};

/// Gateway result type
pub type Result<T> = std::result::Result<T, shared::error::GatewayError>;
