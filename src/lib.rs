//! # Portcullis
//!
//! A small authentication service: verifies credentials against a PostgreSQL
//! user store, issues signed time-bounded access tokens, and exposes
//! Prometheus-format telemetry for its own HTTP traffic.
//!
//! ## Endpoints
//!
//! - `GET /` - plaintext liveness message
//! - `POST /auth` - credential verification and token issuance
//! - `GET /metrics` - Prometheus text exposition of request counters and
//!   latency histograms
//!
//! ## Quick Start
//!
//! ```ignore
//! use portcullis::{AppConfig, AppState, build_router};
//! use portcullis::metrics::HttpMetrics;
//! use portcullis::store::{self, PgCredentialStore};
//! use portcullis::token::TokenIssuer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let pool = store::connect(&config).await?;
//!
//!     let state = AppState {
//!         store: Arc::new(PgCredentialStore::new(pool)),
//!         tokens: Arc::new(TokenIssuer::new(&config.jwt_secret)),
//!     };
//!     let app = build_router(state, Arc::new(HttpMetrics::new()));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Security Notes
//!
//! - The signing secret is mandatory configuration; startup fails if
//!   `JWT_SECRET` is unset rather than falling back to a guessable default.
//! - Passwords are compared in constant time against the stored value. The
//!   store holds plaintext passwords - an inherited schema decision this
//!   service preserves for compatibility; see `DESIGN.md`.

pub mod auth;
pub mod config;
pub mod crypto;
pub mod error;
pub mod metrics;
pub mod server;
pub mod store;
pub mod token;

// Re-exports
pub use config::AppConfig;
pub use crypto::{constant_time_eq, constant_time_str_eq};
pub use error::{AppError, ErrorKind};
pub use server::{build_router, AppState};
