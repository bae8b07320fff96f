//! Router integration
//!
//! Extension trait wiring the middleware and the `/metrics` route into an
//! axum router in one call, with the registry passed through explicitly.

use super::middleware::{serve_metrics, track_http_request};
use super::registry::HttpMetrics;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;

/// Adds request instrumentation and the scrape endpoint to a router.
///
/// Apply this last, after all routes are registered, so the middleware wraps
/// every route - including `/metrics` itself and requests that match no
/// route at all.
pub trait InstrumentedRouter {
    fn with_instrumentation(self, metrics: Arc<HttpMetrics>) -> Self;
}

impl<S> InstrumentedRouter for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_instrumentation(self, metrics: Arc<HttpMetrics>) -> Self {
        let for_handler = metrics.clone();

        self.route(
            "/metrics",
            get(move || serve_metrics(for_handler.clone())),
        )
        .layer(middleware::from_fn(move |req, next| {
            track_http_request(metrics.clone(), req, next)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn instrumented(metrics: Arc<HttpMetrics>) -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .route(
                "/items/:id",
                get(|| async { "item" }),
            )
            .with_instrumentation(metrics)
    }

    async fn send(app: &Router, uri: &str) -> StatusCode {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_every_request_is_counted_once() {
        let metrics = Arc::new(HttpMetrics::new());
        let app = instrumented(metrics.clone());

        assert_eq!(send(&app, "/").await, StatusCode::OK);
        assert_eq!(send(&app, "/").await, StatusCode::OK);
        assert_eq!(send(&app, "/missing").await, StatusCode::NOT_FOUND);

        assert_eq!(metrics.requests().total(), 3);
        assert_eq!(
            metrics
                .requests()
                .get("method=\"GET\",route=\"/\",code=\"200\""),
            2
        );
    }

    #[tokio::test]
    async fn test_route_label_uses_matched_pattern() {
        let metrics = Arc::new(HttpMetrics::new());
        let app = instrumented(metrics.clone());

        send(&app, "/items/7").await;
        send(&app, "/items/99").await;

        // Both requests collapse onto the pattern, not the literal paths
        assert_eq!(
            metrics
                .requests()
                .get("method=\"GET\",route=\"/items/:id\",code=\"200\""),
            2
        );
    }

    #[tokio::test]
    async fn test_unmatched_path_falls_back_to_raw_path() {
        let metrics = Arc::new(HttpMetrics::new());
        let app = instrumented(metrics.clone());

        send(&app, "/no/such/route").await;

        assert_eq!(
            metrics
                .requests()
                .get("method=\"GET\",route=\"/no/such/route\",code=\"404\""),
            1
        );
    }

    #[tokio::test]
    async fn test_metrics_endpoint_serves_exposition() {
        let metrics = Arc::new(HttpMetrics::new());
        let app = instrumented(metrics.clone());

        send(&app, "/").await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("http_requests_total{method=\"GET\",route=\"/\",code=\"200\"} 1"));
        assert!(text.contains("# TYPE http_request_duration_seconds histogram"));
    }

    #[tokio::test]
    async fn test_scrape_is_tracked_but_observation_only() {
        let metrics = Arc::new(HttpMetrics::new());
        let app = instrumented(metrics.clone());

        send(&app, "/").await;
        send(&app, "/metrics").await;
        send(&app, "/metrics").await;

        // Each scrape counts as its own request...
        assert_eq!(
            metrics
                .requests()
                .get("method=\"GET\",route=\"/metrics\",code=\"200\""),
            2
        );
        // ...but reading did not disturb the other series
        assert_eq!(
            metrics
                .requests()
                .get("method=\"GET\",route=\"/\",code=\"200\""),
            1
        );
        assert_eq!(metrics.requests().total(), 3);
    }
}
