//! Tweet and comment domain models

mod comment;
mod tweet;

pub use comment::Comment;
pub use tweet::Tweet;
