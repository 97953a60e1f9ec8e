//! Keyword search over tweet text (/tweets/search)

use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;
use crate::domain::twitter::tweets;
use crate::routes::auth::AuthUser;
use crate::services::error::{AppError, LogErr};
use crate::views::{self, View};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/tweets/search", get(search))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    keyword: Option<String>,
}

/// GET /tweets/search?keyword=... - Tweets containing the keyword
async fn search(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<View, AppError> {
    let keyword = query.keyword.unwrap_or_default();

    let found = tweets::search_tweets(&state.db, Some(keyword.as_str()))
        .await
        .log_500("Search tweets error")?;

    tracing::debug!(keyword = %keyword, matches = found.len(), "Tweet search");

    Ok(views::tweets::search(&found, &keyword))
}
