//! Domain schema module
//!
//! This module contains the field-schema validation logic for the
//! supported API commands.

pub mod commands;
pub mod registry;
pub mod types;

pub use registry::SchemaRegistry;
pub use types::{CommandSchema, FieldConstraint, FieldRequirement, FieldRule};
