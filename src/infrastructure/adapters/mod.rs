//! Infrastructure adapters module
//!
//! This module contains adapters for external services.

pub mod cache;

pub use cache::{CacheAdapter, CacheEntry};
