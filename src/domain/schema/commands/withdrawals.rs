use serde_json::json;

use crate::domain::command::Command;
use crate::domain::schema::registry::SchemaRegistry;
use crate::domain::schema::types::{CommandSchema, FieldConstraint, FieldRule};

const AMOUNT_PATTERN: &str = r"^[0-9]+(\.[0-9]+)?$";

pub fn register_withdrawals(registry: &mut SchemaRegistry) {
    registry.register_schema(CommandSchema {
        command: Command::GetWithdrawalInformation,
        description: "Look up a previously created withdrawal".to_string(),
        field_rules: vec![FieldRule::required(
            "id",
            vec![
                FieldConstraint::MinLength(1),
                FieldConstraint::MaxLength(64),
            ],
        )],
    });

    registry.register_schema(CommandSchema {
        command: Command::CreateWithdrawal,
        description: "Create a withdrawal to an external wallet address".to_string(),
        field_rules: vec![
            FieldRule::required(
                "amount",
                vec![FieldConstraint::Pattern(AMOUNT_PATTERN.to_string())],
            ),
            FieldRule::required(
                "currency",
                vec![
                    FieldConstraint::MinLength(2),
                    FieldConstraint::MaxLength(10),
                ],
            ),
            FieldRule::required(
                "currency2",
                vec![
                    FieldConstraint::MinLength(2),
                    FieldConstraint::MaxLength(10),
                ],
            ),
            FieldRule::required(
                "address",
                vec![
                    FieldConstraint::MinLength(1),
                    FieldConstraint::MaxLength(128),
                ],
            ),
            // XRP transfers are unroutable without a destination tag
            FieldRule::required_if(
                "dest_tag",
                "currency",
                json!("XRP"),
                vec![FieldConstraint::MaxLength(20)],
            ),
            FieldRule::optional(
                "auto_confirm",
                vec![FieldConstraint::Enum(vec!["0".to_string(), "1".to_string()])],
            ),
            FieldRule::optional("note", vec![FieldConstraint::MaxLength(255)]),
            FieldRule::optional("ipn_url", vec![FieldConstraint::MaxLength(255)]),
        ],
    });
}
