//! Tweet pages

use crate::domain::twitter::{Comment, Tweet};
use crate::routes::names;

use super::{View, escape, layout, method_form};

fn search_form(keyword: &str) -> String {
    format!(
        r#"<form method="GET" action="{action}"><input type="text" name="keyword" value="{keyword}"><button type="submit">Search</button></form>"#,
        action = names::tweets_search(None),
        keyword = escape(keyword),
    )
}

fn tweet_list(tweets: &[Tweet]) -> String {
    let items: String = tweets
        .iter()
        .map(|t| {
            format!(
                r#"<li><a href="{href}">{text}</a></li>"#,
                href = names::tweets_show(t.id),
                text = escape(&t.tweet),
            )
        })
        .collect();
    format!(r#"<ul class="tweets">{items}</ul>"#)
}

fn tweet_form(action: &str, method: &str, text: &str, submit: &str) -> String {
    method_form(
        action,
        method,
        &format!(
            r#"<textarea name="tweet" maxlength="255" required>{}</textarea><button type="submit">{}</button>"#,
            escape(text),
            submit
        ),
    )
}

pub fn index(tweets: &[Tweet]) -> View {
    let body = format!(
        "<h1>Tweets</h1>{}{}",
        search_form(""),
        if tweets.is_empty() {
            "<p>No tweets yet.</p>".to_string()
        } else {
            tweet_list(tweets)
        }
    );

    View::new("tweets.index", layout("Tweets", &body)).with("tweets", &tweets)
}

pub fn create() -> View {
    let body = format!(
        "<h1>New tweet</h1>{}",
        tweet_form(&names::tweets_store(), "POST", "", "Tweet")
    );

    View::new("tweets.create", layout("New tweet", &body))
}

pub fn show(tweet: &Tweet, comments: &[Comment], viewer_id: i64) -> View {
    let mut body = format!(
        r#"<article class="tweet"><p>{text}</p><time>{at}</time></article>"#,
        text = escape(&tweet.tweet),
        at = tweet.created_at.format("%Y-%m-%d %H:%M"),
    );

    if tweet.is_owned_by(viewer_id) {
        body.push_str(&format!(
            r#"<a href="{}">Edit</a>{}"#,
            names::tweets_edit(tweet.id),
            method_form(
                &names::tweets_destroy(tweet.id),
                "DELETE",
                r#"<button type="submit">Delete</button>"#
            ),
        ));
    }

    body.push_str("<h2>Comments</h2>");
    if comments.is_empty() {
        body.push_str("<p>No comments yet.</p>");
    } else {
        let items: String = comments
            .iter()
            .map(|c| {
                format!(
                    r#"<li><a href="{href}">{text}</a></li>"#,
                    href = names::tweets_comments_show(tweet.id, c.id),
                    text = escape(&c.comment),
                )
            })
            .collect();
        body.push_str(&format!(r#"<ul class="comments">{items}</ul>"#));
    }
    body.push_str(&format!(
        r#"<a href="{}">Add a comment</a>"#,
        names::tweets_comments_create(tweet.id)
    ));

    View::new("tweets.show", layout("Tweet", &body))
        .with("tweet", tweet)
        .with("comments", &comments)
}

pub fn edit(tweet: &Tweet) -> View {
    let body = format!(
        "<h1>Edit tweet</h1>{}",
        tweet_form(&names::tweets_update(tweet.id), "PUT", &tweet.tweet, "Update")
    );

    View::new("tweets.edit", layout("Edit tweet", &body)).with("tweet", tweet)
}

pub fn search(tweets: &[Tweet], keyword: &str) -> View {
    let results = if tweets.is_empty() {
        "<p>No tweets found.</p>".to_string()
    } else {
        tweet_list(tweets)
    };
    let body = format!("<h1>Search</h1>{}{}", search_form(keyword), results);

    View::new("tweets.search", layout("Search", &body))
        .with("tweets", &tweets)
        .with("keyword", &keyword)
}
