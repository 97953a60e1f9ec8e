pub mod comments;
pub mod tweets;
