//! HTTP infrastructure module
//!
//! This module contains the form encoding, transport session, and request
//! execution machinery for talking to the payment API.

pub mod encoding;
pub mod executor;
pub mod transport;

pub use executor::RequestExecutor;
pub use transport::{HttpTransport, PreparedRequest, Transport};
