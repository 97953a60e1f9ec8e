//! Database pool and migration utilities
//!
//! Domain functions use sqlx's generic Executor trait, so they accept both
//! `&SqlitePool` and `&mut SqliteConnection` (transactions):
//!
//! ```ignore
//! pub async fn my_query<'e, E>(executor: E, id: i64) -> Result<MyType, sqlx::Error>
//! where
//!     E: Executor<'e, Database = Sqlite>,
//! {
//!     sqlx::query_as("SELECT * FROM my_table WHERE id = ?")
//!         .bind(id)
//!         .fetch_one(executor)
//!         .await
//! }
//! ```
//!
//! Routes own transaction boundaries when they need more than one statement.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;

/// Open the pool described by `config`, creating the database file if needed
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Apply pending migrations from `migrations/`
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
