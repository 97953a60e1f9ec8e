pub mod twitter;
pub mod users;
