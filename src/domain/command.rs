//! Command domain model - the fixed set of upstream API operations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One named operation exposed by the upstream payment API.
///
/// The canonical string form doubles as the URL path segment appended to
/// the versioned API base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    GetCoinBalances,
    GetWithdrawalInformation,
    CreateComplexTransaction,
    GetPaymentInfo,
    CreateWithdrawal,
    GetRatesWithAccepted,
}

impl Command {
    /// All supported commands
    pub const ALL: [Command; 6] = [
        Command::GetCoinBalances,
        Command::GetWithdrawalInformation,
        Command::CreateComplexTransaction,
        Command::GetPaymentInfo,
        Command::CreateWithdrawal,
        Command::GetRatesWithAccepted,
    ];

    /// Canonical command name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::GetCoinBalances => "GetCoinBalances",
            Command::GetWithdrawalInformation => "GetWithdrawalInformation",
            Command::CreateComplexTransaction => "CreateComplexTransaction",
            Command::GetPaymentInfo => "GetPaymentInfo",
            Command::CreateWithdrawal => "CreateWithdrawal",
            Command::GetRatesWithAccepted => "GetRatesWithAccepted",
        }
    }

    /// Whether the command changes upstream state
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::CreateComplexTransaction | Command::CreateWithdrawal
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = crate::shared::error::GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| crate::shared::error::GatewayError::CommandNotSupported {
                command: s.to_string(),
            })
    }
}

/// HTTP method for a gateway request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = crate::shared::error::GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            other => Err(crate::shared::error::GatewayError::UnsupportedMethod {
                method: other.to_string(),
            }),
        }
    }
}
