use crate::domain::command::Command;
use crate::domain::schema::registry::SchemaRegistry;
use crate::domain::schema::types::{CommandSchema, FieldConstraint, FieldRule};

/// Decimal amount, e.g. "0.01" or "25"
const AMOUNT_PATTERN: &str = r"^[0-9]+(\.[0-9]+)?$";

pub fn register_transactions(registry: &mut SchemaRegistry) {
    registry.register_schema(CommandSchema {
        command: Command::CreateComplexTransaction,
        description: "Create a deposit transaction bound to a wallet address".to_string(),
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
                "deposit_address",
                vec![
                    FieldConstraint::MinLength(1),
                    FieldConstraint::MaxLength(128),
                ],
            ),
            FieldRule::required(
                "transaction_id",
                vec![
                    FieldConstraint::MinLength(1),
                    FieldConstraint::MaxLength(64),
                ],
            ),
            FieldRule::optional("ipn_url", vec![FieldConstraint::MaxLength(255)]),
            FieldRule::optional(
                "expiration",
                vec![FieldConstraint::Pattern(r"^[0-9]+$".to_string())],
            ),
            FieldRule::optional("buyer_email", vec![FieldConstraint::MaxLength(255)]),
        ],
    });

    registry.register_schema(CommandSchema {
        command: Command::GetPaymentInfo,
        description: "Look up the status of a payment transaction".to_string(),
        field_rules: vec![FieldRule::required(
            "txid",
            vec![
                FieldConstraint::MinLength(1),
                FieldConstraint::MaxLength(128),
            ],
        )],
    });
}
