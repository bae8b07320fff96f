//! Fixed registry of the service's HTTP metric series
//!
//! Both series share one label set per request, so a scrape always shows the
//! same label combinations on the counter and the histogram.

use super::exposition;
use super::types::{Histogram, LabeledCounter};

/// Latency bucket boundaries in seconds. Fixed; part of the scrape contract
/// with downstream dashboards.
pub const DURATION_BUCKETS: &[f64] = &[0.1, 0.3, 0.5, 1.0, 2.0, 5.0];

/// The two process-wide request series.
///
/// Constructed once at startup and shared as `Arc<HttpMetrics>`; every
/// completed request mutates it through [`HttpMetrics::record`], and the
/// `/metrics` handler reads it. Values reset only on process restart.
#[derive(Debug)]
pub struct HttpMetrics {
    requests: LabeledCounter,
    duration: Histogram,
}

impl Default for HttpMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpMetrics {
    pub fn new() -> Self {
        Self {
            requests: LabeledCounter::new(),
            duration: Histogram::new(DURATION_BUCKETS),
        }
    }

    /// Record one completed request: exactly one counter increment and one
    /// histogram observation, with identical labels.
    pub fn record(&self, method: &str, route: &str, status: u16, elapsed_secs: f64) {
        let labels = format!("method=\"{method}\",route=\"{route}\",code=\"{status}\"");
        self.requests.inc(&labels);
        self.duration.observe(&labels, elapsed_secs);
    }

    /// Request counter (`http_requests_total`).
    pub fn requests(&self) -> &LabeledCounter {
        &self.requests
    }

    /// Latency histogram (`http_request_duration_seconds`).
    pub fn duration(&self) -> &Histogram {
        &self.duration
    }

    /// Render both series in Prometheus text exposition format.
    pub fn render(&self) -> String {
        exposition::render(self)
    }
}
