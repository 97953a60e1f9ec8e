//! User domain - DB queries for users
//!
//! All functions use the generic Executor pattern, allowing them to work with
//! both `&SqlitePool` (for standalone queries) and `&mut SqliteConnection` (for transactions).

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Executor, Sqlite};

/// An account that owns tweets and comments. Credentials live with the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert a user
#[cfg(test)]
pub async fn create_user<'e, E>(executor: E, name: &str, email: &str) -> Result<User, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let now = Utc::now();

    sqlx::query_as(
        r#"
        INSERT INTO users (name, email, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, email, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Get a user by ID
pub async fn get_user_by_id<'e, E>(executor: E, user_id: i64) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as("SELECT id, name, email, created_at, updated_at FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(executor)
        .await
}
