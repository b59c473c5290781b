use std::collections::HashMap;

use serde_json::Value;

use super::commands::{
    account::register_account, transactions::register_transactions,
    withdrawals::register_withdrawals,
};
use super::types::{CommandSchema, FieldConstraint, FieldRequirement};
use crate::domain::command::Command;
use crate::domain::fields::{scalar_form, FieldMap};
use crate::shared::error::{GatewayError, GatewayResult};

/// Schema registry for command field validation
pub struct SchemaRegistry {
    pub(crate) schemas: HashMap<Command, CommandSchema>,
}

impl SchemaRegistry {
    /// Create a new schema registry with all supported commands registered
    pub fn new() -> Self {
        let mut registry = Self {
            schemas: HashMap::new(),
        };

        register_account(&mut registry);
        register_transactions(&mut registry);
        register_withdrawals(&mut registry);

        registry
    }

    /// Register a command schema
    pub fn register_schema(&mut self, schema: CommandSchema) {
        self.schemas.insert(schema.command, schema);
    }

    /// Get a command schema
    pub fn get_schema(&self, command: Command) -> Option<&CommandSchema> {
        self.schemas.get(&command)
    }

    /// Validate a field map against the schema for a command.
    ///
    /// Fields present in the map but not declared in the schema are
    /// tolerated, so callers can pass fields added upstream before the
    /// schema tables catch up.
    pub fn validate(&self, command: Command, fields: &FieldMap) -> GatewayResult<()> {
        let schema = self
            .schemas
            .get(&command)
            .ok_or_else(|| GatewayError::CommandNotSupported {
                command: command.to_string(),
            })?;

        for rule in &schema.field_rules {
            let required = match &rule.requirement {
                FieldRequirement::Required => true,
                FieldRequirement::Optional => false,
                FieldRequirement::RequiredIf { field, equals } => fields
                    .get(field)
                    .map(|value| scalar_eq(value, equals))
                    .unwrap_or(false),
            };

            match fields.get(&rule.name) {
                Some(value) => {
                    for constraint in &rule.constraints {
                        self.apply_constraint(command, value, constraint, &rule.name)?;
                    }
                }
                None if required => {
                    return Err(GatewayError::MissingRequiredField {
                        command: command.to_string(),
                        field: rule.name.clone(),
                    });
                }
                None => {}
            }
        }

        Ok(())
    }

    /// Apply a single validation constraint
    fn apply_constraint(
        &self,
        command: Command,
        value: &Value,
        constraint: &FieldConstraint,
        field_name: &str,
    ) -> GatewayResult<()> {
        match constraint {
            FieldConstraint::MinLength(min_len) => {
                if let Value::String(s) = value {
                    if s.len() < *min_len {
                        return Err(GatewayError::InvalidField {
                            command: command.to_string(),
                            reason: format!("field {} too short: minimum length is {}", field_name, min_len),
                        });
                    }
                }
            }
            FieldConstraint::MaxLength(max_len) => {
                if let Value::String(s) = value {
                    if s.len() > *max_len {
                        return Err(GatewayError::InvalidField {
                            command: command.to_string(),
                            reason: format!("field {} too long: maximum length is {}", field_name, max_len),
                        });
                    }
                }
            }
            FieldConstraint::MinValue(min_val) => {
                if let Value::Number(n) = value {
                    if let Some(f) = n.as_f64() {
                        if f < *min_val {
                            return Err(GatewayError::InvalidField {
                                command: command.to_string(),
                                reason: format!("field {} too small: minimum value is {}", field_name, min_val),
                            });
                        }
                    }
                }
            }
            FieldConstraint::MaxValue(max_val) => {
                if let Value::Number(n) = value {
                    if let Some(f) = n.as_f64() {
                        if f > *max_val {
                            return Err(GatewayError::InvalidField {
                                command: command.to_string(),
                                reason: format!("field {} too large: maximum value is {}", field_name, max_val),
                            });
                        }
                    }
                }
            }
            FieldConstraint::Pattern(pattern) => {
                if let Value::String(s) = value {
                    use regex::Regex;
                    match Regex::new(pattern) {
                        Ok(regex) => {
                            if !regex.is_match(s) {
                                return Err(GatewayError::InvalidField {
                                    command: command.to_string(),
                                    reason: format!("field {} doesn't match pattern: {}", field_name, pattern),
                                });
                            }
                        }
                        Err(e) => {
                            return Err(GatewayError::Validation(format!(
                                "Invalid regex pattern '{}': {}",
                                pattern, e
                            )));
                        }
                    }
                }
            }
            FieldConstraint::Enum(allowed_values) => {
                if let Some(s) = scalar_form(value) {
                    if !allowed_values.contains(&s) {
                        return Err(GatewayError::InvalidField {
                            command: command.to_string(),
                            reason: format!("field {} must be one of: {:?}", field_name, allowed_values),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Compare two scalar values by canonical string form, so `"1"` and `1`
/// satisfy the same conditional rule.
fn scalar_eq(left: &Value, right: &Value) -> bool {
    match (scalar_form(left), scalar_form(right)) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
