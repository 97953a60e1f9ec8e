//! Comment pages. Every comment page binds its parent tweet.

use crate::domain::twitter::{Comment, Tweet};
use crate::routes::names;

use super::{View, escape, layout, method_form};

fn comment_form(action: &str, method: &str, text: &str, submit: &str) -> String {
    method_form(
        action,
        method,
        &format!(
            r#"<textarea name="comment" maxlength="255" required>{}</textarea><button type="submit">{}</button>"#,
            escape(text),
            submit
        ),
    )
}

fn parent(tweet: &Tweet) -> String {
    format!(
        r#"<blockquote class="tweet"><a href="{}">{}</a></blockquote>"#,
        names::tweets_show(tweet.id),
        escape(&tweet.tweet)
    )
}

pub fn create(tweet: &Tweet) -> View {
    let body = format!(
        "<h1>New comment</h1>{}{}",
        parent(tweet),
        comment_form(&names::tweets_comments_store(tweet.id), "POST", "", "Comment")
    );

    View::new("tweets.comments.create", layout("New comment", &body)).with("tweet", tweet)
}

pub fn show(tweet: &Tweet, comment: &Comment, viewer_id: i64) -> View {
    let mut body = format!(
        r#"{}<article class="comment"><p>{}</p><time>{}</time></article>"#,
        parent(tweet),
        escape(&comment.comment),
        comment.updated_at.format("%Y-%m-%d %H:%M"),
    );

    if comment.is_owned_by(viewer_id) {
        body.push_str(&format!(
            r#"<a href="{}">Edit</a>{}"#,
            names::tweets_comments_edit(tweet.id, comment.id),
            method_form(
                &names::tweets_comments_destroy(tweet.id, comment.id),
                "DELETE",
                r#"<button type="submit">Delete</button>"#
            ),
        ));
    }

    View::new("tweets.comments.show", layout("Comment", &body))
        .with("tweet", tweet)
        .with("comment", comment)
}

pub fn edit(tweet: &Tweet, comment: &Comment) -> View {
    let body = format!(
        "<h1>Edit comment</h1>{}{}",
        parent(tweet),
        comment_form(
            &names::tweets_comments_update(tweet.id, comment.id),
            "PUT",
            &comment.comment,
            "Update"
        )
    );

    View::new("tweets.comments.edit", layout("Edit comment", &body))
        .with("tweet", tweet)
        .with("comment", comment)
}
