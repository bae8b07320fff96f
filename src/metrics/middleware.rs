//! Instrumentation middleware
//!
//! Wraps every request: starts a timer at entry, lets the inner service
//! produce a response (success or error path alike), then records the
//! outcome. Recording cannot fail and never blocks the response.

use super::registry::HttpMetrics;
use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;

/// Record one counter increment and one histogram observation per request.
///
/// The route label is the matched route pattern (`/auth`, not the literal
/// path with parameters filled in), which keeps label cardinality bounded.
/// Requests that matched no route fall back to the raw request path.
pub async fn track_http_request(
    metrics: Arc<HttpMetrics>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    metrics.record(&method, &route, response.status().as_u16(), elapsed);

    response
}

/// `GET /metrics` handler: text exposition of the accumulated series.
///
/// Reading is observation-only; the scrape itself is counted like any other
/// request by the middleware, but rendering never mutates the registry.
pub async fn serve_metrics(metrics: Arc<HttpMetrics>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        metrics.render(),
    )
}
