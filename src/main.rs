//! Service entry point: logging, configuration, store pool, router, serve.

use std::sync::Arc;
use tracing::info;

use portcullis::metrics::HttpMetrics;
use portcullis::store::{self, PgCredentialStore};
use portcullis::token::TokenIssuer;
use portcullis::{build_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .json()
        .init();

    // Fails fast on a missing signing secret; there is no insecure default.
    let config = AppConfig::from_env()?;

    let pool = store::connect(&config).await?;

    let state = AppState {
        store: Arc::new(PgCredentialStore::new(pool)),
        tokens: Arc::new(TokenIssuer::new(&config.jwt_secret)),
    };
    let metrics = Arc::new(HttpMetrics::new());
    let app = build_router(state, metrics);

    let addr = format!("0.0.0.0:{}", config.port);
    info!(address = %addr, "Auth service listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
