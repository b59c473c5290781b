//! Request executor for the payment API
//!
//! Builds the endpoint URL, encodes the field map into a form body, sends
//! the request over the reusable transport session, and decodes the JSON
//! response into a normalized result.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::encoding::form_encode;
use super::transport::{HttpTransport, PreparedRequest, Transport};
use crate::config::GatewayConfig;
use crate::domain::command::{Command, HttpMethod};
use crate::domain::fields::FieldMap;
use crate::shared::error::{GatewayError, GatewayResult};

/// Executor for validated API commands.
///
/// Holds the credentials and the transport session for its lifetime. The
/// session is opened on the first execute and reused until the executor
/// is dropped.
pub struct RequestExecutor {
    config: Arc<GatewayConfig>,
    transport: Arc<dyn Transport>,
}

impl RequestExecutor {
    /// Create a new executor with the default HTTP transport
    pub fn new(config: Arc<GatewayConfig>) -> Self {
        let transport = Arc::new(HttpTransport::new(config.api.clone()));
        Self { config, transport }
    }

    /// Create an executor over a custom transport
    pub fn with_transport(config: Arc<GatewayConfig>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Build the prepared request for a command.
    ///
    /// Fields ride in the form body for POST. A non-POST request with a
    /// non-empty field map is rejected: the API has no defined query-string
    /// encoding for command fields.
    pub fn prepare(
        &self,
        command: Command,
        method: HttpMethod,
        fields: &FieldMap,
    ) -> GatewayResult<PreparedRequest> {
        let url = format!(
            "{}/{}?key={}",
            self.config.api.base_url.trim_end_matches('/'),
            command,
            urlencoding::encode(&self.config.api.public_key)
        );

        let body = match method {
            HttpMethod::Post => Some(form_encode(fields)),
            HttpMethod::Get if fields.is_empty() => None,
            other => {
                return Err(GatewayError::UnsupportedMethod {
                    method: other.to_string(),
                })
            }
        };

        Ok(PreparedRequest { url, method, body })
    }

    /// Execute a command against the payment API.
    ///
    /// The field map must already have been accepted by
    /// `SchemaRegistry::validate` for the same command; the executor does
    /// not re-validate. The call is made exactly once with no retries, and
    /// every failure mode surfaces as an `Err` value.
    pub async fn execute(
        &self,
        command: Command,
        method: HttpMethod,
        fields: &FieldMap,
    ) -> GatewayResult<Value> {
        let request = self.prepare(command, method, fields)?;

        debug!(command = %command, method = %method, "Executing API request");

        let raw = self.transport.send(&request).await?;
        decode_payload(&raw)
    }
}

/// Decode a raw response body into a non-empty JSON payload
fn decode_payload(raw: &str) -> GatewayResult<Value> {
    let decoded: Value = serde_json::from_str(raw)
        .map_err(|e| GatewayError::Decode(format!("Unable to parse JSON result ({})", e)))?;

    match &decoded {
        Value::Object(map) if !map.is_empty() => Ok(decoded),
        Value::Array(items) if !items.is_empty() => Ok(decoded),
        _ => Err(GatewayError::Decode(
            "Empty or null JSON result".to_string(),
        )),
    }
}
