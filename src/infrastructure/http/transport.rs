//! HTTP transport adapter for communicating with the payment API
//!
//! The transport owns the session lifecycle: a reqwest client is built
//! lazily on the first call and reused for every call after it, so
//! repeated executes on one instance share connections. The session is
//! released when the transport is dropped.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::domain::command::HttpMethod;
use crate::shared::error::{GatewayError, GatewayResult};

/// A fully prepared outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub url: String,
    pub method: HttpMethod,
    pub body: Option<String>,
}

/// Transport seam between the executor and the network.
///
/// One transport instance serves one logical caller at a time; the session
/// it holds is not meant to be shared across independent callers.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a single network round trip and return the raw response body.
    /// Exactly one attempt is made; failures are terminal for the call.
    async fn send(&self, request: &PreparedRequest) -> GatewayResult<String>;
}

/// Transport backed by a lazily-initialized reqwest client
pub struct HttpTransport {
    config: ApiConfig,
    client: OnceCell<Client>,
}

impl HttpTransport {
    /// Create a new transport; no session is opened until the first send
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Acquire the session, opening it on first use
    async fn session(&self) -> GatewayResult<&Client> {
        self.client
            .get_or_try_init(|| async {
                debug!("Opening transport session");
                let mut builder = Client::builder()
                    .timeout(Duration::from_secs(self.config.timeout_seconds));

                if !self.config.verify_tls {
                    warn!("TLS certificate verification disabled for upstream API calls");
                    builder = builder.danger_accept_invalid_certs(true);
                }

                builder
                    .build()
                    .map_err(|e| GatewayError::Config(format!("Failed to create HTTP client: {}", e)))
            })
            .await
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &PreparedRequest) -> GatewayResult<String> {
        let client = self.session().await?;

        let mut builder = match request.method {
            HttpMethod::Post => client.post(&request.url),
            HttpMethod::Get => client.get(&request.url),
        };

        if let Some(body) = &request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("Request failed: {}", e)))?;

        let response = response
            .error_for_status()
            .map_err(|e| GatewayError::Transport(format!("HTTP error: {}", e)))?;

        response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response body: {}", e)))
    }
}
