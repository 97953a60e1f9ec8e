//! Comment endpoints nested under a tweet (/tweets/{tweet}/comments/*)

use axum::{
    Form, Router,
    extract::State,
    response::Redirect,
    routing::{get, post},
};
use std::sync::Arc;
use validator::Validate;

use crate::AppState;
use crate::domain::twitter::comments;
use crate::routes::auth::AuthUser;
use crate::routes::names;
use crate::services::error::{AppError, LogErr};
use crate::views::{self, View};

use super::forms::CommentForm;
use super::{CommentIds, TweetId, find_comment, find_tweet};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tweets/{tweet}/comments/create", get(create))
        .route("/tweets/{tweet}/comments", post(store))
        .route(
            "/tweets/{tweet}/comments/{comment}",
            get(show).put(update).delete(destroy),
        )
        .route("/tweets/{tweet}/comments/{comment}/edit", get(edit))
}

/// GET /tweets/{tweet}/comments/create - Comment form for a tweet
async fn create(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    TweetId(tweet_id): TweetId,
) -> Result<View, AppError> {
    let tweet = find_tweet(&state.db, tweet_id).await?;

    Ok(views::comments::create(&tweet))
}

/// POST /tweets/{tweet}/comments - Attach a comment by the acting user
async fn store(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    TweetId(tweet_id): TweetId,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, AppError> {
    let tweet = find_tweet(&state.db, tweet_id).await?;
    form.validate()?;

    let comment = comments::create_comment(&state.db, tweet.id, user_id, form.text())
        .await
        .log_500("Create comment error")?;

    tracing::info!(comment_id = comment.id, tweet_id = tweet.id, user_id, "Comment created");

    Ok(Redirect::to(&names::tweets_show(tweet.id)))
}

/// GET /tweets/{tweet}/comments/{comment}
async fn show(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    CommentIds(tweet_id, comment_id): CommentIds,
) -> Result<View, AppError> {
    let (tweet, comment) = find_comment(&state.db, tweet_id, comment_id).await?;

    Ok(views::comments::show(&tweet, &comment, user_id))
}

/// GET /tweets/{tweet}/comments/{comment}/edit - Owner only
async fn edit(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    CommentIds(tweet_id, comment_id): CommentIds,
) -> Result<View, AppError> {
    let (tweet, comment) = find_comment(&state.db, tweet_id, comment_id).await?;
    if !comment.is_owned_by(user_id) {
        return Err(AppError::Forbidden);
    }

    Ok(views::comments::edit(&tweet, &comment))
}

/// PUT /tweets/{tweet}/comments/{comment} - Replace the text, owner only
async fn update(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    CommentIds(tweet_id, comment_id): CommentIds,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, AppError> {
    let (tweet, comment) = find_comment(&state.db, tweet_id, comment_id).await?;
    if !comment.is_owned_by(user_id) {
        return Err(AppError::Forbidden);
    }
    form.validate()?;

    let updated = comments::update_comment_text(&state.db, comment.id, form.text())
        .await
        .log_500("Update comment error")?;
    if !updated {
        return Err(AppError::NotFound);
    }

    tracing::info!(comment_id = comment.id, tweet_id = tweet.id, user_id, "Comment updated");

    Ok(Redirect::to(&names::tweets_comments_show(tweet.id, comment.id)))
}

/// DELETE /tweets/{tweet}/comments/{comment} - Owner only
async fn destroy(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    CommentIds(tweet_id, comment_id): CommentIds,
) -> Result<Redirect, AppError> {
    let (tweet, comment) = find_comment(&state.db, tweet_id, comment_id).await?;
    if !comment.is_owned_by(user_id) {
        return Err(AppError::Forbidden);
    }

    comments::delete_comment(&state.db, comment.id)
        .await
        .log_500("Delete comment error")?;

    tracing::info!(comment_id = comment.id, tweet_id = tweet.id, user_id, "Comment deleted");

    Ok(Redirect::to(&names::tweets_show(tweet.id)))
}
