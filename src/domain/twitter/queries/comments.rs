//! Comment domain - DB queries for comments attached to tweets
//!
//! All functions use the generic Executor pattern, allowing them to work with
//! both `&SqlitePool` (for standalone queries) and `&mut SqliteConnection` (for transactions).

use chrono::Utc;
use sqlx::{Executor, Sqlite};

use super::super::models::Comment;

/// Insert a comment by `user_id` on `tweet_id`
pub async fn create_comment<'e, E>(
    executor: E,
    tweet_id: i64,
    user_id: i64,
    text: &str,
) -> Result<Comment, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let now = Utc::now();

    sqlx::query_as(
        r#"
        INSERT INTO comments (user_id, tweet_id, comment, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, user_id, tweet_id, comment, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(tweet_id)
    .bind(text)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Get a comment by ID regardless of its tweet
#[cfg(test)]
pub async fn get_comment<'e, E>(executor: E, comment_id: i64) -> Result<Option<Comment>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
        SELECT id, user_id, tweet_id, comment, created_at, updated_at
        FROM comments
        WHERE id = ?
        "#,
    )
    .bind(comment_id)
    .fetch_optional(executor)
    .await
}

/// Get a comment only if it is attached to `tweet_id`
pub async fn get_comment_for_tweet<'e, E>(
    executor: E,
    tweet_id: i64,
    comment_id: i64,
) -> Result<Option<Comment>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
        SELECT id, user_id, tweet_id, comment, created_at, updated_at
        FROM comments
        WHERE id = ? AND tweet_id = ?
        "#,
    )
    .bind(comment_id)
    .bind(tweet_id)
    .fetch_optional(executor)
    .await
}

/// List the comments on a tweet, oldest first
pub async fn list_comments_for_tweet<'e, E>(
    executor: E,
    tweet_id: i64,
) -> Result<Vec<Comment>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
        SELECT id, user_id, tweet_id, comment, created_at, updated_at
        FROM comments
        WHERE tweet_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(tweet_id)
    .fetch_all(executor)
    .await
}

/// Replace the text of a comment. Ownership columns are never touched.
pub async fn update_comment_text<'e, E>(
    executor: E,
    comment_id: i64,
    text: &str,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("UPDATE comments SET comment = ?, updated_at = ? WHERE id = ?")
        .bind(text)
        .bind(Utc::now())
        .bind(comment_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a comment row
pub async fn delete_comment<'e, E>(executor: E, comment_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM comments WHERE id = ?")
        .bind(comment_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
