use crate::domain::command::Command;
use crate::domain::schema::registry::SchemaRegistry;
use crate::domain::schema::types::{CommandSchema, FieldConstraint, FieldRule};

pub fn register_account(registry: &mut SchemaRegistry) {
    registry.register_schema(CommandSchema {
        command: Command::GetCoinBalances,
        description: "List balances for all coins on the account".to_string(),
        field_rules: vec![FieldRule::optional(
            "all",
            vec![FieldConstraint::Enum(vec!["0".to_string(), "1".to_string()])],
        )],
    });

    registry.register_schema(CommandSchema {
        command: Command::GetRatesWithAccepted,
        description: "List exchange rates and which currencies the account accepts".to_string(),
        field_rules: vec![
            FieldRule::optional(
                "short",
                vec![FieldConstraint::Enum(vec!["0".to_string(), "1".to_string()])],
            ),
            FieldRule::optional(
                "accepted",
                vec![FieldConstraint::Enum(vec![
                    "0".to_string(),
                    "1".to_string(),
                    "2".to_string(),
                ])],
            ),
        ],
    });
}
