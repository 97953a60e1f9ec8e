//! Form bodies for tweet and comment routes

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Body of `tweets.comments.store` and `tweets.comments.update`
#[derive(Debug, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 255, message = "The comment field must not be greater than 255 characters.")
    )]
    pub comment: String,
}

impl CommentForm {
    pub fn text(&self) -> &str {
        self.comment.trim()
    }
}

/// Body of `tweets.store` and `tweets.update`
#[derive(Debug, Deserialize, Validate)]
pub struct TweetForm {
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 255, message = "The tweet field must not be greater than 255 characters.")
    )]
    pub tweet: String,
}

impl TweetForm {
    pub fn text(&self) -> &str {
        self.tweet.trim()
    }
}

/// Reject empty and whitespace-only input
fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
