//! Tweet model definitions

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A short text post owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Tweet {
    pub id: i64,
    pub user_id: i64,
    pub tweet: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tweet {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
