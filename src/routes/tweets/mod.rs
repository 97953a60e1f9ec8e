//! Tweet resource routes (/tweets/*) and the comments nested under them

pub mod comments;
mod forms;
pub mod resource;
pub mod search;

use axum::{
    Router,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::AppState;
use crate::domain::twitter::{Comment, Tweet, comments as comment_queries, tweets as tweet_queries};
use crate::services::error::{AppError, LogErr};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(search::routes())
        .merge(resource::routes())
        .merge(comments::routes())
}

/// `{tweet}` route parameter. An id that is not a valid integer names no tweet, so it is 404.
pub struct TweetId(pub i64);

/// `{tweet}` and `{comment}` route parameters, with the same 404 rule as [`TweetId`]
pub struct CommentIds(pub i64, pub i64);

impl<S: Send + Sync> FromRequestParts<S> for TweetId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(tweet) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        Ok(TweetId(parse_id(&tweet)?))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CommentIds {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((tweet, comment)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        Ok(CommentIds(parse_id(&tweet)?, parse_id(&comment)?))
    }
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::NotFound)
}

/// Resolve a tweet from its route parameter
async fn find_tweet(db: &SqlitePool, tweet_id: i64) -> Result<Tweet, AppError> {
    tweet_queries::get_tweet(db, tweet_id)
        .await
        .log_500("Get tweet error")?
        .ok_or(AppError::NotFound)
}

/// Resolve a tweet and one of its comments; a comment under another tweet is not found
async fn find_comment(
    db: &SqlitePool,
    tweet_id: i64,
    comment_id: i64,
) -> Result<(Tweet, Comment), AppError> {
    let tweet = find_tweet(db, tweet_id).await?;
    let comment = comment_queries::get_comment_for_tweet(db, tweet.id, comment_id)
        .await
        .log_500("Get comment error")?
        .ok_or(AppError::NotFound)?;

    Ok((tweet, comment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").ok(), Some(42));
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound)));
        assert!(matches!(parse_id("99999999999999999999999"), Err(AppError::NotFound)));
        assert!(matches!(parse_id(""), Err(AppError::NotFound)));
    }
}
