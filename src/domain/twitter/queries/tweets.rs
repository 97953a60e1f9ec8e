//! Tweet domain - DB queries for tweets
//!
//! All functions use the generic Executor pattern, allowing them to work with
//! both `&SqlitePool` (for standalone queries) and `&mut SqliteConnection` (for transactions).

use chrono::Utc;
use sqlx::{Executor, Sqlite};

use super::super::models::Tweet;

/// Insert a new tweet owned by `user_id`
pub async fn create_tweet<'e, E>(executor: E, user_id: i64, text: &str) -> Result<Tweet, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let now = Utc::now();

    sqlx::query_as(
        r#"
        INSERT INTO tweets (user_id, tweet, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, user_id, tweet, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(text)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Get a tweet by ID
pub async fn get_tweet<'e, E>(executor: E, tweet_id: i64) -> Result<Option<Tweet>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        "SELECT id, user_id, tweet, created_at, updated_at FROM tweets WHERE id = ?",
    )
    .bind(tweet_id)
    .fetch_optional(executor)
    .await
}

/// List every tweet, newest first
pub async fn list_tweets<'e, E>(executor: E) -> Result<Vec<Tweet>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
        SELECT id, user_id, tweet, created_at, updated_at
        FROM tweets
        ORDER BY id DESC
        "#,
    )
    .fetch_all(executor)
    .await
}

/// List tweets whose text contains `keyword`, newest first.
///
/// Matching uses SQL `LIKE`, so it ignores ASCII case. Wildcard characters in
/// the keyword match literally. A blank or missing keyword returns every tweet.
pub async fn search_tweets<'e, E>(
    executor: E,
    keyword: Option<&str>,
) -> Result<Vec<Tweet>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());

    let Some(keyword) = keyword else {
        return list_tweets(executor).await;
    };

    sqlx::query_as(
        r#"
        SELECT id, user_id, tweet, created_at, updated_at
        FROM tweets
        WHERE tweet LIKE ? ESCAPE '\'
        ORDER BY id DESC
        "#,
    )
    .bind(like_pattern(keyword))
    .fetch_all(executor)
    .await
}

/// Replace the text of a tweet. Returns false if the tweet does not exist.
pub async fn update_tweet_text<'e, E>(
    executor: E,
    tweet_id: i64,
    text: &str,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("UPDATE tweets SET tweet = ?, updated_at = ? WHERE id = ?")
        .bind(text)
        .bind(Utc::now())
        .bind(tweet_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a tweet; its comments go with it
pub async fn delete_tweet<'e, E>(executor: E, tweet_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM tweets WHERE id = ?")
        .bind(tweet_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Wrap a keyword as a `%keyword%` pattern with `\` as the escape character
fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::twitter::comments;
    use crate::test_support::{seed_user, test_pool};

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("test"), "%test%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    #[tokio::test]
    async fn test_search_matches_substring() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice").await;
        create_tweet(&pool, user.id, "This is a test tweet").await.unwrap();
        create_tweet(&pool, user.id, "This is another tweet").await.unwrap();

        let found = search_tweets(&pool, Some("test")).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tweet, "This is a test tweet");
    }

    #[tokio::test]
    async fn test_search_ignores_case() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice").await;
        create_tweet(&pool, user.id, "Rust is GREAT").await.unwrap();

        let found = search_tweets(&pool, Some("great")).await.unwrap();

        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_search_treats_percent_literally() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice").await;
        create_tweet(&pool, user.id, "100% done").await.unwrap();
        create_tweet(&pool, user.id, "100 done").await.unwrap();

        let found = search_tweets(&pool, Some("100%")).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tweet, "100% done");
    }

    #[tokio::test]
    async fn test_blank_keyword_lists_everything_newest_first() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice").await;
        let first = create_tweet(&pool, user.id, "first").await.unwrap();
        let second = create_tweet(&pool, user.id, "second").await.unwrap();

        let found = search_tweets(&pool, Some("   ")).await.unwrap();
        let ids: Vec<i64> = found.iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![second.id, first.id]);
        assert_eq!(search_tweets(&pool, None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_changes_text_only() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice").await;
        let tweet = create_tweet(&pool, user.id, "before").await.unwrap();

        assert!(update_tweet_text(&pool, tweet.id, "after").await.unwrap());

        let updated = get_tweet(&pool, tweet.id).await.unwrap().unwrap();
        assert_eq!(updated.tweet, "after");
        assert_eq!(updated.user_id, tweet.user_id);
        assert_eq!(updated.created_at, tweet.created_at);
        assert!(!update_tweet_text(&pool, tweet.id + 100, "x").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_cascades_to_comments() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice").await;
        let tweet = create_tweet(&pool, user.id, "doomed").await.unwrap();
        let comment = comments::create_comment(&pool, tweet.id, user.id, "reply")
            .await
            .unwrap();

        assert!(delete_tweet(&pool, tweet.id).await.unwrap());

        assert!(get_tweet(&pool, tweet.id).await.unwrap().is_none());
        assert!(comments::get_comment(&pool, comment.id).await.unwrap().is_none());
    }
}
