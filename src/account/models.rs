//! Data models for accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of supported currency codes, stored as short symbolic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Currency {
    RUB,
    USD,
    EUR,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUB" => Ok(Currency::RUB),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            other => Err(UnknownCurrency(other.to_string())),
        }
    }
}

/// A single-currency balance owned by exactly one user.
///
/// `amount` is in the smallest currency unit and never negative.
#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: i64,
    pub user_id: i64,
    pub currency: Currency,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Account snapshot returned by the HTTP boundary
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AccountSnapshot {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 100)]
    pub amount: i64,
    #[schema(example = "RUB")]
    pub currency: Currency,
}

impl From<&Account> for AccountSnapshot {
    fn from(account: &Account) -> Self {
        Self {
            id: account.account_id,
            amount: account.amount,
            currency: account.currency,
        }
    }
}

/// Deposit/withdrawal request body
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct BalanceChangeRequest {
    /// Amount in the smallest currency unit, must be positive
    #[schema(example = 10)]
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_round_trip() {
        for code in ["RUB", "USD", "EUR"] {
            let currency = Currency::from_str(code).unwrap();
            assert_eq!(currency.as_str(), code);
        }
    }

    #[test]
    fn test_currency_rejects_unknown_code() {
        let err = Currency::from_str("BTC").unwrap_err();
        assert_eq!(err.to_string(), "unknown currency code: BTC");
    }

    #[test]
    fn test_currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::RUB).unwrap(), r#""RUB""#);
    }

    #[test]
    fn test_snapshot_shape() {
        let account = Account {
            account_id: 7,
            user_id: 1,
            currency: Currency::EUR,
            amount: 42,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(AccountSnapshot::from(&account)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["amount"], 42);
        assert_eq!(json["currency"], "EUR");
    }
}
