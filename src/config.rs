//! Runtime configuration read from the environment

use std::env;

use thiserror::Error;
use validator::Validate;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: &'static str,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Server configuration with validation
#[derive(Clone, Debug, Validate)]
pub struct Config {
    /// sqlx connection URL, e.g. `sqlite://chirp.db`
    #[validate(length(min = 1, message = "DATABASE_URL cannot be empty"))]
    pub database_url: String,

    #[validate(length(min = 1, message = "HOST cannot be empty"))]
    pub host: String,

    #[validate(range(min = 1, max = 65535, message = "PORT must be between 1 and 65535"))]
    pub port: u16,

    /// Shared HS256 secret used to verify access tokens
    #[validate(length(min = 32, message = "JWT_SECRET must be at least 32 characters"))]
    pub jwt_secret: String,

    /// Where unauthenticated requests are sent
    #[validate(length(min = 1, message = "LOGIN_URL cannot be empty"))]
    pub login_url: String,

    #[validate(range(
        min = 1,
        max = 100,
        message = "DATABASE_MAX_CONNECTIONS must be between 1 and 100"
    ))]
    pub max_connections: u32,
}

impl Config {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, applying defaults and validation
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://chirp.db".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT", "3000")?,
            jwt_secret: lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            login_url: lookup("LOGIN_URL").unwrap_or_else(|| "/login".to_string()),
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", "5")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, field: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = lookup(field).unwrap_or_else(|| default.to_string());
    value.parse().map_err(|e| ConfigError::Parse {
        field,
        value,
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup_from_map(map: HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> {
        move |key| map.get(key).cloned()
    }

    fn settings(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from_map(settings(&[("JWT_SECRET", SECRET)]))).unwrap();

        assert_eq!(config.database_url, "sqlite://chirp.db");
        assert_eq!(config.port, 3000);
        assert_eq!(config.login_url, "/login");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_missing_secret() {
        let err = Config::from_lookup(lookup_from_map(settings(&[]))).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("JWT_SECRET")));
    }

    #[test]
    fn test_short_secret_fails_validation() {
        let err = Config::from_lookup(lookup_from_map(settings(&[("JWT_SECRET", "short")]))).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_port_zero_fails_validation() {
        let err = Config::from_lookup(lookup_from_map(settings(&[
            ("JWT_SECRET", SECRET),
            ("PORT", "0"),
        ])))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unparseable_port() {
        let err = Config::from_lookup(lookup_from_map(settings(&[
            ("JWT_SECRET", SECRET),
            ("PORT", "eighty"),
        ])))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { field: "PORT", .. }));
    }

    #[test]
    fn test_empty_database_url() {
        let err = Config::from_lookup(lookup_from_map(settings(&[
            ("JWT_SECRET", SECRET),
            ("DATABASE_URL", ""),
        ])))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
