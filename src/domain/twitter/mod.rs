//! Twitter domain - models and queries for tweets and their comments

pub mod models;
pub mod queries;

// Re-export models for convenience
pub use models::*;

// Re-export query modules
pub use queries::{comments, tweets};
