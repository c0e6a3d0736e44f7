//! Repository layer for user rows

use super::models::{User, UserRole};
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool, Row};

fn user_from_row(row: &PgRow) -> User {
    User {
        user_id: row.get("user_id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        role: UserRole::from(row.get::<i16, _>("role")),
        created_at: row.get("created_at"),
    }
}

/// User repository for CRUD operations
pub struct UserRepository;

impl UserRepository {
    /// Get user by ID
    pub async fn get_by_id(pool: &PgPool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT user_id, username, password_hash, role, created_at
               FROM users_tb WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Get user by username
    pub async fn get_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT user_id, username, password_hash, role, created_at
               FROM users_tb WHERE username = $1"#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Insert a new user inside the caller's transaction
    pub async fn insert(
        conn: &mut PgConnection,
        username: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<User, sqlx::Error> {
        let row = sqlx::query(
            r#"INSERT INTO users_tb (username, password_hash, role)
               VALUES ($1, $2, $3)
               RETURNING user_id, username, password_hash, role, created_at"#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role as i16)
        .fetch_one(conn)
        .await?;

        Ok(user_from_row(&row))
    }
}
