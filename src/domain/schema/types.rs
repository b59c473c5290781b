use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::command::Command;

/// Command schema with per-field validation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSchema {
    pub command: Command,
    pub description: String,
    pub field_rules: Vec<FieldRule>,
}

/// Validation rule for a single named field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    pub name: String,
    pub requirement: FieldRequirement,
    pub constraints: Vec<FieldConstraint>,
}

/// When a field must be present
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FieldRequirement {
    Required,
    Optional,
    /// Required only when another field carries a specific scalar value
    RequiredIf { field: String, equals: Value },
}

/// Validation constraints applied to a present field value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FieldConstraint {
    MinLength(usize),
    MaxLength(usize),
    MinValue(f64),
    MaxValue(f64),
    Pattern(String),
    Enum(Vec<String>),
}

impl FieldRule {
    /// Unconditionally required field
    pub fn required(name: &str, constraints: Vec<FieldConstraint>) -> Self {
        Self {
            name: name.to_string(),
            requirement: FieldRequirement::Required,
            constraints,
        }
    }

    /// Field the caller may omit
    pub fn optional(name: &str, constraints: Vec<FieldConstraint>) -> Self {
        Self {
            name: name.to_string(),
            requirement: FieldRequirement::Optional,
            constraints,
        }
    }

    /// Field required only when `field` equals `equals`
    pub fn required_if(name: &str, field: &str, equals: Value, constraints: Vec<FieldConstraint>) -> Self {
        Self {
            name: name.to_string(),
            requirement: FieldRequirement::RequiredIf {
                field: field.to_string(),
                equals,
            },
            constraints,
        }
    }
}
