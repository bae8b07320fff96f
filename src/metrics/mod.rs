//! HTTP request instrumentation
//!
//! Two Prometheus-compatible series cover the service's own traffic:
//!
//! - `http_requests_total{method, route, code}` - counter
//! - `http_request_duration_seconds{method, route, code}` - histogram,
//!   buckets 0.1 / 0.3 / 0.5 / 1 / 2 / 5 seconds
//!
//! The registry is constructed once at startup and handed to the middleware
//! and the `/metrics` handler explicitly; there is no global singleton.
//! Recording is lock-light (atomic increments behind a read lock) and
//! infallible, so a request always completes regardless of what the metrics
//! layer does.

mod exposition;
mod middleware;
mod registry;
mod router;
mod types;

pub use middleware::{serve_metrics, track_http_request};
pub use registry::{HttpMetrics, DURATION_BUCKETS};
pub use router::InstrumentedRouter;
pub use types::{Histogram, HistogramSnapshot, LabeledCounter};
