//! Repository layer for account rows

use super::models::{Account, Currency};
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool, Row};
use std::str::FromStr;

/// Map a `SELECT account_id, user_id, currency, amount, created_at` row.
///
/// An unknown stored currency code is a data corruption, surfaced as a
/// decode error rather than a panic.
pub(crate) fn account_from_row(row: &PgRow) -> Result<Account, sqlx::Error> {
    let code: String = row.get("currency");
    let currency = Currency::from_str(&code).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    Ok(Account {
        account_id: row.get("account_id"),
        user_id: row.get("user_id"),
        currency,
        amount: row.get("amount"),
        created_at: row.get("created_at"),
    })
}

/// Account repository for CRUD operations
pub struct AccountRepository;

impl AccountRepository {
    /// Get account by ID (no lock)
    pub async fn get_by_id(pool: &PgPool, account_id: i64) -> Result<Option<Account>, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT account_id, user_id, currency, amount, created_at
               FROM accounts_tb WHERE account_id = $1"#,
        )
        .bind(account_id)
        .fetch_optional(pool)
        .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    /// All accounts of one user, ordered by account id
    pub async fn list_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<Account>, sqlx::Error> {
        let rows = sqlx::query(
            r#"SELECT account_id, user_id, currency, amount, created_at
               FROM accounts_tb WHERE user_id = $1 ORDER BY account_id"#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        rows.iter().map(account_from_row).collect()
    }

    /// Create an account with zero balance inside the caller's transaction
    pub async fn create(
        conn: &mut PgConnection,
        user_id: i64,
        currency: Currency,
    ) -> Result<Account, sqlx::Error> {
        let row = sqlx::query(
            r#"INSERT INTO accounts_tb (user_id, currency, amount)
               VALUES ($1, $2, 0)
               RETURNING account_id, user_id, currency, amount, created_at"#,
        )
        .bind(user_id)
        .bind(currency.as_str())
        .fetch_one(conn)
        .await?;

        account_from_row(&row)
    }
}
