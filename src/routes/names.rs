//! Named routes: one URL builder per route name

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

pub fn tweets_index() -> String {
    "/tweets".to_string()
}

pub fn tweets_create() -> String {
    "/tweets/create".to_string()
}

pub fn tweets_store() -> String {
    tweets_index()
}

pub fn tweets_search(keyword: Option<&str>) -> String {
    match keyword {
        Some(keyword) => format!(
            "/tweets/search?keyword={}",
            utf8_percent_encode(keyword, NON_ALPHANUMERIC)
        ),
        None => "/tweets/search".to_string(),
    }
}

pub fn tweets_show(tweet_id: i64) -> String {
    format!("/tweets/{tweet_id}")
}

pub fn tweets_edit(tweet_id: i64) -> String {
    format!("/tweets/{tweet_id}/edit")
}

pub fn tweets_update(tweet_id: i64) -> String {
    tweets_show(tweet_id)
}

pub fn tweets_destroy(tweet_id: i64) -> String {
    tweets_show(tweet_id)
}

pub fn tweets_comments_create(tweet_id: i64) -> String {
    format!("/tweets/{tweet_id}/comments/create")
}

pub fn tweets_comments_store(tweet_id: i64) -> String {
    format!("/tweets/{tweet_id}/comments")
}

pub fn tweets_comments_show(tweet_id: i64, comment_id: i64) -> String {
    format!("/tweets/{tweet_id}/comments/{comment_id}")
}

pub fn tweets_comments_edit(tweet_id: i64, comment_id: i64) -> String {
    format!("/tweets/{tweet_id}/comments/{comment_id}/edit")
}

pub fn tweets_comments_update(tweet_id: i64, comment_id: i64) -> String {
    tweets_comments_show(tweet_id, comment_id)
}

pub fn tweets_comments_destroy(tweet_id: i64, comment_id: i64) -> String {
    tweets_comments_show(tweet_id, comment_id)
}
