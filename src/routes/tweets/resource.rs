//! Tweet resource endpoints (/tweets, /tweets/{tweet})

use axum::{
    Form, Router,
    extract::State,
    response::Redirect,
    routing::get,
};
use std::sync::Arc;
use validator::Validate;

use crate::AppState;
use crate::domain::twitter::{comments, tweets};
use crate::routes::auth::AuthUser;
use crate::routes::names;
use crate::services::error::{AppError, LogErr};
use crate::views::{self, View};

use super::{TweetId, find_tweet};
use super::forms::TweetForm;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tweets", get(index).post(store))
        .route("/tweets/create", get(create))
        .route("/tweets/{tweet}", get(show).put(update).delete(destroy))
        .route("/tweets/{tweet}/edit", get(edit))
}

/// GET /tweets - Every tweet, newest first
async fn index(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
) -> Result<View, AppError> {
    let result = tweets::list_tweets(&state.db)
        .await
        .log_500("List tweets error")?;

    Ok(views::tweets::index(&result))
}

/// GET /tweets/create
async fn create(AuthUser(_user_id): AuthUser) -> View {
    views::tweets::create()
}

/// POST /tweets - Post a tweet as the acting user
async fn store(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Form(form): Form<TweetForm>,
) -> Result<Redirect, AppError> {
    form.validate()?;

    let tweet = tweets::create_tweet(&state.db, user_id, form.text())
        .await
        .log_500("Create tweet error")?;

    tracing::info!(tweet_id = tweet.id, user_id, "Tweet created");

    Ok(Redirect::to(&names::tweets_index()))
}

/// GET /tweets/{tweet} - Tweet with its comments
async fn show(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    TweetId(tweet_id): TweetId,
) -> Result<View, AppError> {
    let tweet = find_tweet(&state.db, tweet_id).await?;
    let tweet_comments = comments::list_comments_for_tweet(&state.db, tweet.id)
        .await
        .log_500("List comments error")?;

    Ok(views::tweets::show(&tweet, &tweet_comments, user_id))
}

/// GET /tweets/{tweet}/edit - Owner only
async fn edit(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    TweetId(tweet_id): TweetId,
) -> Result<View, AppError> {
    let tweet = find_tweet(&state.db, tweet_id).await?;
    if !tweet.is_owned_by(user_id) {
        return Err(AppError::Forbidden);
    }

    Ok(views::tweets::edit(&tweet))
}

/// PUT /tweets/{tweet} - Replace the text, owner only
async fn update(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    TweetId(tweet_id): TweetId,
    Form(form): Form<TweetForm>,
) -> Result<Redirect, AppError> {
    let tweet = find_tweet(&state.db, tweet_id).await?;
    if !tweet.is_owned_by(user_id) {
        return Err(AppError::Forbidden);
    }
    form.validate()?;

    let updated = tweets::update_tweet_text(&state.db, tweet.id, form.text())
        .await
        .log_500("Update tweet error")?;
    if !updated {
        return Err(AppError::NotFound);
    }

    tracing::info!(tweet_id = tweet.id, user_id, "Tweet updated");

    Ok(Redirect::to(&names::tweets_show(tweet.id)))
}

/// DELETE /tweets/{tweet} - Owner only; comments are removed with it
async fn destroy(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    TweetId(tweet_id): TweetId,
) -> Result<Redirect, AppError> {
    let tweet = find_tweet(&state.db, tweet_id).await?;
    if !tweet.is_owned_by(user_id) {
        return Err(AppError::Forbidden);
    }

    tweets::delete_tweet(&state.db, tweet.id)
        .await
        .log_500("Delete tweet error")?;

    tracing::info!(tweet_id = tweet.id, user_id, "Tweet deleted");

    Ok(Redirect::to(&names::tweets_index()))
}
