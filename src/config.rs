//! Application Configuration
//!
//! Loads configuration from environment variables. Store connection defaults
//! exist for local development only; the token signing secret has no default
//! and startup fails when it is missing.

use anyhow::{Context, Result};
use std::time::Duration;

/// Minimum accepted signing secret length, in bytes.
const MIN_SECRET_LEN: usize = 32;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Token signing secret (required)
    pub jwt_secret: String,

    /// Credential store host
    pub db_host: String,

    /// Credential store port
    pub db_port: u16,

    /// Credential store database name
    pub db_name: String,

    /// Credential store user
    pub db_user: String,

    /// Credential store password
    pub db_password: String,

    /// Maximum connections in the store pool
    pub db_max_connections: u32,

    /// Maximum time to wait for a pooled connection
    pub db_acquire_timeout: Duration,

    /// HTTP listening port
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET`: token signing secret (required, min 32 chars)
    /// - `DB_HOST`: store host (default: `postgres-service`)
    /// - `DB_PORT`: store port (default: 5432)
    /// - `POSTGRES_DB`: database name (default: `users_db`)
    /// - `POSTGRES_USER`: database user (default: `moath`)
    /// - `DB_PASSWORD`: database password (default: `moath123`)
    /// - `DB_MAX_CONNECTIONS`: pool size (default: 10)
    /// - `DB_ACQUIRE_TIMEOUT`: pool acquire timeout in seconds (default: 30)
    /// - `PORT`: HTTP listening port (default: 8080)
    ///
    /// # Errors
    ///
    /// Fails when `JWT_SECRET` is unset or shorter than 32 characters. A
    /// hardcoded fallback secret would make every issued token forgeable, so
    /// the process refuses to start without one.
    pub fn from_env() -> Result<Self> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .context("JWT_SECRET environment variable required")?;

        if jwt_secret.len() < MIN_SECRET_LEN {
            anyhow::bail!("JWT_SECRET must be at least {} characters", MIN_SECRET_LEN);
        }

        Ok(Self {
            jwt_secret,
            db_host: env_or("DB_HOST", "postgres-service"),
            db_port: env_parse_or("DB_PORT", 5432),
            db_name: env_or("POSTGRES_DB", "users_db"),
            db_user: env_or("POSTGRES_USER", "moath"),
            db_password: env_or("DB_PASSWORD", "moath123"),
            db_max_connections: env_parse_or("DB_MAX_CONNECTIONS", 10),
            db_acquire_timeout: Duration::from_secs(env_parse_or("DB_ACQUIRE_TIMEOUT", 30)),
            port: env_parse_or("PORT", 8080),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; each test uses distinct keys via
    // the helpers rather than racing on JWT_SECRET itself.

    #[test]
    fn test_env_or_default() {
        assert_eq!(env_or("PORTCULLIS_TEST_UNSET_VAR", "fallback"), "fallback");
    }

    #[test]
    fn test_env_parse_or_default() {
        assert_eq!(env_parse_or::<u16>("PORTCULLIS_TEST_UNSET_PORT", 8080), 8080);
    }

    #[test]
    fn test_env_parse_or_invalid_falls_back() {
        std::env::set_var("PORTCULLIS_TEST_BAD_NUMBER", "not-a-number");
        assert_eq!(env_parse_or::<u32>("PORTCULLIS_TEST_BAD_NUMBER", 10), 10);
        std::env::remove_var("PORTCULLIS_TEST_BAD_NUMBER");
    }

    #[test]
    fn test_env_parse_or_reads_value() {
        std::env::set_var("PORTCULLIS_TEST_GOOD_NUMBER", "42");
        assert_eq!(env_parse_or::<u32>("PORTCULLIS_TEST_GOOD_NUMBER", 10), 42);
        std::env::remove_var("PORTCULLIS_TEST_GOOD_NUMBER");
    }
}
