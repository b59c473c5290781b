//! Integration tests for the payment service flows

use std::sync::Arc;

use serde_json::json;

use crate::application::services::{InitializePaymentRequest, InitializeWithdrawalRequest};
use crate::domain::security::IpnVerifier;
use crate::shared::error::GatewayError;
use crate::tests::{common, common::MockTransport, config, fixtures};

fn payment_request() -> InitializePaymentRequest {
    InitializePaymentRequest {
        amount: "0.5".to_string(),
        payment_currency: "BTC".to_string(),
        deposit_address: "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy".to_string(),
        transaction_id: "order-1337".to_string(),
        expiration: 3600,
    }
}

fn withdrawal_request() -> InitializeWithdrawalRequest {
    InitializeWithdrawalRequest {
        amount: "0.25".to_string(),
        currency: "BTC".to_string(),
        payment_currency: "BTC".to_string(),
        address: "1BoatSLRHtKNngkdXEeobR76b53LETtpyT".to_string(),
        note: "payout #42".to_string(),
        dest_tag: None,
    }
}

#[tokio::test]
async fn test_get_balances_returns_result_member() {
    let transport = Arc::new(MockTransport::returning(&fixtures::balances_body()));
    let service = common::test_service(config::test_config(), transport).await;

    let balances = service.get_balances().await.unwrap();
    assert_eq!(balances["BTC"]["balance"], json!("1.25000000"));
}

#[tokio::test]
async fn test_get_balances_is_cached() {
    let transport = Arc::new(MockTransport::returning(&fixtures::balances_body()));
    let service = common::test_service(config::caching_test_config(), transport.clone()).await;

    let first = service.get_balances().await.unwrap();
    let second = service.get_balances().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(transport.call_count("GetCoinBalances").await, 1);
}

#[tokio::test]
async fn test_get_withdrawal_info_cached_per_id() {
    let transport = Arc::new(MockTransport::returning(&fixtures::withdrawal_body()));
    let service = common::test_service(config::caching_test_config(), transport.clone()).await;

    service.get_withdrawal_info("wd-77").await.unwrap();
    service.get_withdrawal_info("wd-77").await.unwrap();
    service.get_withdrawal_info("wd-78").await.unwrap();

    assert_eq!(transport.call_count("GetWithdrawalInformation").await, 2);
}

#[tokio::test]
async fn test_initialize_payment_extracts_wallet_handle() {
    let transport = Arc::new(MockTransport::returning(&fixtures::transaction_body()));
    let service = common::test_service(config::test_config(), transport.clone()).await;

    let handle = service.initialize_payment(payment_request()).await.unwrap();

    assert_eq!(handle.external_id, "tx-9001");
    assert_eq!(handle.wallet_id, "w-1");
    assert_eq!(handle.wallet_address, "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy");

    // The configured deposit IPN URL rides along in the form body
    let requests = transport.requests().await;
    let body = requests[0].body.as_deref().unwrap_or_default();
    assert!(body.contains("ipn_url="));
    assert!(body.contains("transaction_id=order-1337"));
}

#[tokio::test]
async fn test_initialize_payment_surfaces_upstream_error() {
    let transport = Arc::new(MockTransport::returning(&fixtures::upstream_error_body(
        "Amount too small",
    )));
    let service = common::test_service(config::test_config(), transport).await;

    let err = service.initialize_payment(payment_request()).await.unwrap_err();
    assert!(err.is_upstream());
    match err {
        GatewayError::Upstream(message) => assert_eq!(message, "Amount too small"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_check_payment_status_returns_payload() {
    let transport = Arc::new(MockTransport::returning(&fixtures::payment_status_body()));
    let service = common::test_service(config::test_config(), transport.clone()).await;

    let status = service.check_payment_status("tx-9001").await.unwrap();
    assert_eq!(status["result"]["status"], json!(100));

    // Status polls are never served from cache
    let service = common::test_service(config::caching_test_config(), transport.clone()).await;
    service.check_payment_status("tx-9001").await.unwrap();
    service.check_payment_status("tx-9001").await.unwrap();
    assert_eq!(transport.call_count("GetPaymentInfo").await, 3);
}

#[tokio::test]
async fn test_initialize_withdrawal_auto_confirms() {
    let transport = Arc::new(MockTransport::returning(&fixtures::withdrawal_body()));
    let service = common::test_service(config::test_config(), transport.clone()).await;

    let receipt = service
        .initialize_withdrawal(withdrawal_request())
        .await
        .unwrap();
    assert_eq!(receipt.id.as_deref(), Some("wd-77"));

    let requests = transport.requests().await;
    let body = requests[0].body.as_deref().unwrap_or_default();
    assert!(body.contains("auto_confirm=1"));
    assert!(body.contains("currency2=BTC"));
    assert!(body.contains("note=payout%20%2342"));
}

#[tokio::test]
async fn test_withdrawal_to_xrp_requires_dest_tag() {
    let transport = Arc::new(MockTransport::new());
    let service = common::test_service(config::test_config(), transport.clone()).await;

    let mut request = withdrawal_request();
    request.payment_currency = "XRP".to_string();

    let err = service.initialize_withdrawal(request).await.unwrap_err();
    match &err {
        GatewayError::MissingRequiredField { field, .. } => assert_eq!(field, "dest_tag"),
        other => panic!("unexpected error: {:?}", other),
    }
    // Rejected before any network traffic
    assert_eq!(transport.open_count().await, 0);

    let mut request = withdrawal_request();
    request.payment_currency = "XRP".to_string();
    request.dest_tag = Some("20251".to_string());
    service.initialize_withdrawal(request).await.unwrap();
}

#[tokio::test]
async fn test_accepted_currencies_filters_and_caches() {
    let transport = Arc::new(MockTransport::returning(&fixtures::rates_body()));
    let service = common::test_service(config::caching_test_config(), transport.clone()).await;

    let currencies = service.accepted_currencies().await.unwrap();
    let entries = currencies.as_object().unwrap();

    // Fiat, offline, and not-accepted entries are filtered out
    assert_eq!(entries.len(), 2);
    assert!(entries.contains_key("BTC"));
    assert!(entries.contains_key("LTC"));

    service.accepted_currencies().await.unwrap();
    assert_eq!(transport.call_count("GetRatesWithAccepted").await, 1);
}

#[tokio::test]
async fn test_ipn_signature_round_trip() {
    let config = config::test_config();
    let secret = config.ipn.secret_key.clone();
    let transport = Arc::new(MockTransport::new());
    let service = common::test_service(config, transport).await;

    let body = b"txn_id=tx-9001&status=100";
    let header = IpnVerifier::new(secret).signature(body);

    assert!(service.verify_ipn_signature(body, &header));
    assert!(!service.verify_ipn_signature(b"txn_id=tx-9001&status=-1", &header));
    assert!(!service.verify_ipn_signature(body, "deadbeef"));
}
