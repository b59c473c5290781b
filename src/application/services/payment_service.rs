//! Payment service orchestrating balance lookups, payments, withdrawals,
//! and IPN verification on top of the validation and execution engine

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::GatewayConfig;
use crate::domain::command::{Command, HttpMethod};
use crate::domain::fields::{field_map, scalar_form, FieldMap};
use crate::domain::schema::SchemaRegistry;
use crate::domain::security::IpnVerifier;
use crate::infrastructure::adapters::CacheAdapter;
use crate::infrastructure::http::RequestExecutor;
use crate::shared::error::{GatewayError, GatewayResult};
use crate::shared::logging::LoggingUtils;

/// Request to initialize a deposit payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializePaymentRequest {
    pub amount: String,
    pub payment_currency: String,
    pub deposit_address: String,
    pub transaction_id: String,
    /// Expiration in seconds
    pub expiration: u64,
}

/// Handle to a created payment transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentHandle {
    pub external_id: String,
    pub wallet_id: String,
    pub wallet_address: String,
}

/// Request to initialize a withdrawal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeWithdrawalRequest {
    pub amount: String,
    /// Currency the balance is held in
    pub currency: String,
    /// Currency the withdrawal is paid out in
    pub payment_currency: String,
    pub address: String,
    pub note: String,
    /// Destination tag, for currencies that route by one
    pub dest_tag: Option<String>,
}

/// Receipt for a created withdrawal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    pub id: Option<String>,
}

/// High-level payment operations against the upstream API.
///
/// Every operation validates its field map, executes the command over the
/// shared session, and classifies the decoded payload; read-heavy lookups
/// are memoized through the cache adapter.
pub struct PaymentService {
    config: Arc<GatewayConfig>,
    registry: Arc<SchemaRegistry>,
    executor: Arc<RequestExecutor>,
    cache: Arc<CacheAdapter>,
    ipn_verifier: IpnVerifier,
}

impl PaymentService {
    pub fn new(
        config: Arc<GatewayConfig>,
        registry: Arc<SchemaRegistry>,
        executor: Arc<RequestExecutor>,
        cache: Arc<CacheAdapter>,
    ) -> Self {
        let ipn_verifier = IpnVerifier::new(config.ipn.secret_key.clone());
        Self {
            config,
            registry,
            executor,
            cache,
            ipn_verifier,
        }
    }

    /// Get coin balances, cached for five minutes
    pub async fn get_balances(&self) -> GatewayResult<Value> {
        let fields = FieldMap::new();
        let payload = self
            .call_cached(Command::GetCoinBalances, &fields, None)
            .await?;
        Ok(result_member(&payload))
    }

    /// Get withdrawal info, cached for a minute per withdrawal id
    pub async fn get_withdrawal_info(&self, id: &str) -> GatewayResult<Value> {
        let fields = field_map([("id", json!(id))]);
        let payload = self
            .call_cached(Command::GetWithdrawalInformation, &fields, Some(id))
            .await?;
        Ok(result_member(&payload))
    }

    /// Create a deposit transaction bound to a wallet address
    pub async fn initialize_payment(
        &self,
        request: InitializePaymentRequest,
    ) -> GatewayResult<PaymentHandle> {
        let fields = field_map([
            ("amount", json!(request.amount)),
            ("currency", json!(request.payment_currency)),
            ("deposit_address", json!(request.deposit_address)),
            ("transaction_id", json!(request.transaction_id)),
            ("ipn_url", json!(self.config.ipn.deposit_url)),
            ("expiration", json!(request.expiration.to_string())),
        ]);

        let payload = self.call(Command::CreateComplexTransaction, &fields).await?;

        let external_id = string_member(&payload, "id").ok_or_else(|| {
            GatewayError::Upstream("transaction payload missing id".to_string())
        })?;
        let wallet = payload
            .get("wallets")
            .and_then(Value::as_array)
            .and_then(|wallets| wallets.first())
            .ok_or_else(|| {
                GatewayError::Upstream("transaction payload missing wallets".to_string())
            })?;
        let wallet_id = string_member(wallet, "id").ok_or_else(|| {
            GatewayError::Upstream("wallet entry missing id".to_string())
        })?;
        let wallet_address = string_member(wallet, "address").ok_or_else(|| {
            GatewayError::Upstream("wallet entry missing address".to_string())
        })?;

        Ok(PaymentHandle {
            external_id,
            wallet_id,
            wallet_address,
        })
    }

    /// Look up the current status of a payment transaction
    pub async fn check_payment_status(&self, transaction_id: &str) -> GatewayResult<Value> {
        let fields = field_map([("txid", json!(transaction_id))]);
        self.call(Command::GetPaymentInfo, &fields).await
    }

    /// Create a withdrawal; auto-confirm skips the email confirmation step
    pub async fn initialize_withdrawal(
        &self,
        request: InitializeWithdrawalRequest,
    ) -> GatewayResult<WithdrawalReceipt> {
        let mut fields = field_map([
            ("amount", json!(request.amount)),
            ("currency", json!(request.payment_currency)),
            ("currency2", json!(request.currency)),
            ("address", json!(request.address)),
            ("auto_confirm", json!(1)),
            ("note", json!(request.note)),
            ("ipn_url", json!(self.config.ipn.withdrawal_url)),
        ]);
        if let Some(dest_tag) = &request.dest_tag {
            fields.insert("dest_tag".to_string(), json!(dest_tag));
        }

        let payload = self.call(Command::CreateWithdrawal, &fields).await?;

        let id = payload
            .get("result")
            .and_then(|result| string_member(result, "id"));
        Ok(WithdrawalReceipt { id })
    }

    /// Get the accepted currencies configured on the account, cached for a
    /// day. Entries are filtered to online, non-fiat, accepted currencies
    /// and come back keyed by symbol.
    pub async fn accepted_currencies(&self) -> GatewayResult<Value> {
        let fields = field_map([("accepted", json!(1))]);
        let payload = self
            .call_cached(Command::GetRatesWithAccepted, &fields, None)
            .await?;

        let currencies = payload
            .as_object()
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(_, currency)| currency_is_accepted(currency))
                    .map(|(symbol, currency)| (symbol.clone(), currency.clone()))
                    .collect::<Map<String, Value>>()
            })
            .unwrap_or_default();

        Ok(Value::Object(currencies))
    }

    /// Check whether an IPN callback carries a valid signature
    pub fn verify_ipn_signature(&self, raw_body: &[u8], signature_header: &str) -> bool {
        self.ipn_verifier.verify(raw_body, signature_header)
    }

    /// Validate, execute, and classify one command
    async fn call(&self, command: Command, fields: &FieldMap) -> GatewayResult<Value> {
        let request_id = LoggingUtils::generate_request_id();
        let field_names: Vec<&str> = fields.keys().map(String::as_str).collect();
        LoggingUtils::log_request(&request_id, command.as_str(), &field_names);

        self.registry.validate(command, fields)?;

        let payload = match self
            .executor
            .execute(command, HttpMethod::Post, fields)
            .await
        {
            Ok(payload) => payload,
            Err(error) => {
                LoggingUtils::log_error(&request_id, command.as_str(), &error);
                return Err(error);
            }
        };

        LoggingUtils::log_response(&request_id, command.as_str(), &payload);

        if let Some(message) = upstream_error(&payload) {
            let error = GatewayError::Upstream(message);
            LoggingUtils::log_error(&request_id, command.as_str(), &error);
            return Err(error);
        }

        Ok(payload)
    }

    /// As `call`, but memoized per the command's TTL policy
    async fn call_cached(
        &self,
        command: Command,
        fields: &FieldMap,
        discriminator: Option<&str>,
    ) -> GatewayResult<Value> {
        let ttl = match CacheAdapter::ttl_for_command(command) {
            Some(ttl) => ttl,
            None => return self.call(command, fields).await,
        };

        let key = self.cache.generate_cache_key(command, discriminator);
        if let Some(entry) = self.cache.get(&key).await? {
            return Ok(entry.payload);
        }

        let payload = self.call(command, fields).await?;
        self.cache.set(&key, payload.clone(), ttl).await?;
        Ok(payload)
    }
}

/// A payload is a business failure when its `error` member is present and
/// neither empty nor the literal "ok".
fn upstream_error(payload: &Value) -> Option<String> {
    let error = payload.get("error")?;
    match scalar_form(error) {
        Some(message) if message.is_empty() || message == "ok" => None,
        Some(message) => Some(message),
        None if error.is_null() => None,
        // Structured error bodies are still failures
        None => Some(error.to_string()),
    }
}

/// The payload's `result` member, or an empty object when absent
fn result_member(payload: &Value) -> Value {
    payload
        .get("result")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

fn string_member(value: &Value, member: &str) -> Option<String> {
    value.get(member).and_then(scalar_form)
}

fn currency_is_accepted(currency: &Value) -> bool {
    let is_fiat = currency.get("is_fiat").and_then(scalar_form);
    let status = currency.get("status").and_then(scalar_form);
    let accepted = currency.get("accepted").and_then(scalar_form);

    is_fiat.as_deref() == Some("0")
        && status.as_deref() == Some("online")
        && accepted.as_deref() == Some("1")
}
