//! Common test utilities and mock implementations
//!
//! This module provides the mock transport and shared helpers used across
//! the test modules.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::services::PaymentService;
use crate::config::GatewayConfig;
use crate::domain::schema::SchemaRegistry;
use crate::infrastructure::adapters::CacheAdapter;
use crate::infrastructure::http::{PreparedRequest, RequestExecutor, Transport};
use crate::shared::error::{GatewayError, GatewayResult};

/// Mock transport with scripted responses and session-open accounting.
///
/// Mirrors the real transport's lifecycle: the session is "opened" once on
/// the first send and reused afterwards, observable via `open_count`.
pub struct MockTransport {
    responses: Mutex<HashMap<String, GatewayResult<String>>>,
    default_response: Mutex<GatewayResult<String>>,
    session_open: Mutex<bool>,
    open_count: Mutex<u32>,
    call_count: Mutex<HashMap<String, u32>>,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl MockTransport {
    /// Create a mock transport with a benign default response
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            default_response: Mutex::new(Ok(r#"{"error":"ok","result":{}}"#.to_string())),
            session_open: Mutex::new(false),
            open_count: Mutex::new(0),
            call_count: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock transport that answers every request with `body`
    pub fn returning(body: &str) -> Self {
        Self {
            default_response: Mutex::new(Ok(body.to_string())),
            ..Self::new()
        }
    }

    /// Create a mock transport that fails every request
    pub fn failing(error: GatewayError) -> Self {
        Self {
            default_response: Mutex::new(Err(error)),
            ..Self::new()
        }
    }

    /// Script the response for one command
    pub async fn set_response(&self, command: &str, response: GatewayResult<String>) {
        self.responses
            .lock()
            .await
            .insert(command.to_string(), response);
    }

    /// Number of sessions opened so far (0 before the first send)
    pub async fn open_count(&self) -> u32 {
        *self.open_count.lock().await
    }

    /// Number of sends seen for a command
    pub async fn call_count(&self, command: &str) -> u32 {
        *self.call_count.lock().await.get(command).unwrap_or(&0)
    }

    /// All requests seen, in order
    pub async fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().await.clone()
    }

    /// Command name from a prepared request URL
    fn command_of(request: &PreparedRequest) -> String {
        request
            .url
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .split('?')
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &PreparedRequest) -> GatewayResult<String> {
        {
            let mut open = self.session_open.lock().await;
            if !*open {
                *open = true;
                *self.open_count.lock().await += 1;
            }
        }

        let command = Self::command_of(request);
        {
            let mut call_count = self.call_count.lock().await;
            *call_count.entry(command.clone()).or_insert(0) += 1;
        }
        self.requests.lock().await.push(request.clone());

        let responses = self.responses.lock().await;
        if let Some(response) = responses.get(&command) {
            response.clone()
        } else {
            self.default_response.lock().await.clone()
        }
    }
}

/// Build a payment service wired to a mock transport
pub async fn test_service(
    config: GatewayConfig,
    transport: Arc<MockTransport>,
) -> PaymentService {
    let config = Arc::new(config);
    let registry = Arc::new(SchemaRegistry::new());
    let executor = Arc::new(RequestExecutor::with_transport(
        config.clone(),
        transport,
    ));
    let cache = Arc::new(
        CacheAdapter::new(config.cache.clone())
            .await
            .expect("cache adapter"),
    );

    PaymentService::new(config, registry, executor, cache)
}
