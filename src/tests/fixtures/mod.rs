//! Test fixtures and mock data for the gateway test suite

use serde_json::{json, Value};

use crate::domain::fields::{field_map, FieldMap};

/// Raw balances payload as the API returns it
pub fn balances_body() -> String {
    json!({
        "error": "ok",
        "result": {
            "BTC": {"balance": "1.25000000", "balancef": 1.25},
            "LTC": {"balance": "40.00000000", "balancef": 40.0}
        }
    })
    .to_string()
}

/// Raw created-transaction payload
pub fn transaction_body() -> String {
    json!({
        "id": "tx-9001",
        "status": "pending",
        "wallets": [
            {"id": "w-1", "address": "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy"}
        ]
    })
    .to_string()
}

/// Raw payment-status payload
pub fn payment_status_body() -> String {
    json!({
        "error": "ok",
        "result": {
            "txn_id": "tx-9001",
            "status": 100,
            "status_text": "Complete",
            "amount": "0.50000000"
        }
    })
    .to_string()
}

/// Raw created-withdrawal payload
pub fn withdrawal_body() -> String {
    json!({
        "error": "ok",
        "result": {"id": "wd-77", "status": 0, "amount": "0.25000000"}
    })
    .to_string()
}

/// Raw rates payload keyed by currency symbol
pub fn rates_body() -> String {
    json!({
        "BTC": {"is_fiat": 0, "status": "online", "accepted": 1, "name": "Bitcoin", "rate_btc": "1.0"},
        "LTC": {"is_fiat": 0, "status": "online", "accepted": 1, "name": "Litecoin", "rate_btc": "0.002"},
        "USD": {"is_fiat": 1, "status": "online", "accepted": 1, "name": "US Dollar", "rate_btc": "0.00002"},
        "XYZ": {"is_fiat": 0, "status": "offline", "accepted": 1, "name": "Dead Coin", "rate_btc": "0.0"},
        "ETH": {"is_fiat": 0, "status": "online", "accepted": 0, "name": "Ether", "rate_btc": "0.05"}
    })
    .to_string()
}

/// Raw upstream-failure payload
pub fn upstream_error_body(message: &str) -> String {
    json!({"error": message}).to_string()
}

/// A field map that passes CreateWithdrawal validation
pub fn withdrawal_fields() -> FieldMap {
    field_map([
        ("amount", json!("0.25")),
        ("currency", json!("BTC")),
        ("currency2", json!("BTC")),
        ("address", json!("1BoatSLRHtKNngkdXEeobR76b53LETtpyT")),
    ])
}

/// A field map that passes CreateComplexTransaction validation
pub fn transaction_fields() -> FieldMap {
    field_map([
        ("amount", json!("0.5")),
        ("currency", json!("BTC")),
        ("deposit_address", json!("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy")),
        ("transaction_id", json!("order-1337")),
    ])
}

/// Parse a raw body fixture back into a JSON value
pub fn as_value(body: &str) -> Value {
    serde_json::from_str(body).expect("fixture is valid JSON")
}
