//! Router assembly
//!
//! Wires the handlers, shared state, and instrumentation into one axum
//! router. The metrics registry is applied last so the middleware wraps
//! every route, the scrape endpoint included.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::auth;
use crate::metrics::{HttpMetrics, InstrumentedRouter};
use crate::store::CredentialStore;
use crate::token::TokenIssuer;

/// State shared across request handlers.
///
/// The store is held behind the [`CredentialStore`] trait so handlers never
/// depend on the pooling library's shape; tests substitute in-memory stores.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub tokens: Arc<TokenIssuer>,
}

/// Build the service router.
pub fn build_router(state: AppState, metrics: Arc<HttpMetrics>) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/auth", post(auth::authenticate))
        .with_state(state)
        .with_instrumentation(metrics)
}

/// Plaintext liveness message.
async fn status() -> &'static str {
    "Auth Service is running!"
}
