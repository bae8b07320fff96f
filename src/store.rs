//! Credential Store
//!
//! The persistent user store is an external collaborator; this module is the
//! whole interface to it. The service issues exactly one point lookup per
//! authentication attempt and performs no writes.
//!
//! The [`CredentialStore`] trait separates "no matching record" (`Ok(None)`)
//! from infrastructure failure (`Err`), so the auth handler can map the two
//! onto 401 and 500 without inspecting driver error types.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::config::AppConfig;

/// One row of the external `users` table. Read-only from this service's
/// perspective; the password column is stored plaintext by the upstream
/// schema and compared verbatim.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub password: String,
}

/// Store-level errors. `Display` output is safe to log; it is never sent to
/// clients.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Could not establish the connection pool
    #[error("database connection failed: {0}")]
    Connection(String),

    /// A lookup query failed (network, timeout, bad schema)
    #[error("credential lookup failed: {0}")]
    Lookup(#[source] sqlx::Error),
}

/// Point lookup of a user record by email.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch at most one record whose email matches exactly.
    ///
    /// `Ok(None)` means no such user; `Err` means the store itself failed.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// PostgreSQL-backed credential store.
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        sqlx::query_as::<_, UserRecord>(
            "SELECT id, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Lookup)
    }
}

/// Create the connection pool from configuration.
///
/// The pool enforces its own connection limit and acquire queue; requests
/// borrow connections concurrently and the rest of the service treats that
/// policy as opaque.
pub async fn connect(config: &AppConfig) -> Result<PgPool, StoreError> {
    info!(
        host = %config.db_host,
        port = config.db_port,
        database = %config.db_name,
        max_connections = config.db_max_connections,
        "Connecting to credential store"
    );

    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .database(&config.db_name)
        .username(&config.db_user)
        .password(&config.db_password);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .test_before_acquire(true)
        .connect_with(options)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    info!("Credential store pool initialized");

    Ok(pool)
}
