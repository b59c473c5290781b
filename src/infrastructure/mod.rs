//! Infrastructure layer - External concerns and adapters
//!
//! This module contains the HTTP transport and executor, and the response
//! cache adapter.

pub mod adapters;
pub mod http;

pub use adapters::{CacheAdapter, CacheEntry};
pub use http::{HttpTransport, PreparedRequest, RequestExecutor, Transport};
