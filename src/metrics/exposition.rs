//! Prometheus text exposition format
//!
//! Renders the registry into the standard scrape format:
//!
//! ```text
//! # HELP http_requests_total Total HTTP requests
//! # TYPE http_requests_total counter
//! http_requests_total{method="POST",route="/auth",code="200"} 42
//!
//! # HELP http_request_duration_seconds Duration of HTTP requests in seconds
//! # TYPE http_request_duration_seconds histogram
//! http_request_duration_seconds_bucket{method="POST",route="/auth",code="200",le="0.1"} 40
//! http_request_duration_seconds_bucket{method="POST",route="/auth",code="200",le="+Inf"} 42
//! http_request_duration_seconds_sum{method="POST",route="/auth",code="200"} 1.234
//! http_request_duration_seconds_count{method="POST",route="/auth",code="200"} 42
//! ```

use super::registry::HttpMetrics;
use super::types::HistogramSnapshot;
use std::fmt::Write;

pub fn render(metrics: &HttpMetrics) -> String {
    let mut out = String::with_capacity(2048);

    write_counter(
        &mut out,
        "http_requests_total",
        "Total HTTP requests",
        metrics.requests().snapshot(),
    );
    write_histogram(
        &mut out,
        "http_request_duration_seconds",
        "Duration of HTTP requests in seconds",
        metrics.duration().bounds(),
        metrics.duration().snapshot(),
    );

    out
}

fn write_counter(out: &mut String, name: &str, help: &str, mut series: Vec<(String, u64)>) {
    if series.is_empty() {
        return;
    }
    series.sort();

    writeln!(out, "# HELP {name} {help}").unwrap();
    writeln!(out, "# TYPE {name} counter").unwrap();
    for (labels, value) in series {
        writeln!(out, "{name}{{{labels}}} {value}").unwrap();
    }
    writeln!(out).unwrap();
}

fn write_histogram(
    out: &mut String,
    name: &str,
    help: &str,
    bounds: &[f64],
    mut series: Vec<HistogramSnapshot>,
) {
    if series.is_empty() {
        return;
    }
    series.sort_by(|a, b| a.labels.cmp(&b.labels));

    writeln!(out, "# HELP {name} {help}").unwrap();
    writeln!(out, "# TYPE {name} histogram").unwrap();
    for snap in series {
        let labels = &snap.labels;
        for (bound, hits) in bounds.iter().zip(&snap.cumulative) {
            let le = format_bound(*bound);
            writeln!(out, "{name}_bucket{{{labels},le=\"{le}\"}} {hits}").unwrap();
        }
        writeln!(out, "{name}_bucket{{{labels},le=\"+Inf\"}} {}", snap.count).unwrap();
        writeln!(out, "{name}_sum{{{labels}}} {}", snap.sum).unwrap();
        writeln!(out, "{name}_count{{{labels}}} {}", snap.count).unwrap();
    }
    writeln!(out).unwrap();
}

/// Format a bucket bound the way Prometheus expects: integral bounds
/// without a trailing `.0`.
fn format_bound(bound: f64) -> String {
    if bound == bound.floor() {
        format!("{:.0}", bound)
    } else {
        format!("{}", bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_renders_nothing() {
        let metrics = HttpMetrics::new();
        assert_eq!(render(&metrics), "");
    }

    #[test]
    fn test_counter_exposition() {
        let metrics = HttpMetrics::new();
        metrics.record("GET", "/", 200, 0.01);
        metrics.record("GET", "/", 200, 0.01);

        let out = render(&metrics);
        assert!(out.contains("# HELP http_requests_total Total HTTP requests"));
        assert!(out.contains("# TYPE http_requests_total counter"));
        assert!(out
            .contains("http_requests_total{method=\"GET\",route=\"/\",code=\"200\"} 2"));
    }

    #[test]
    fn test_histogram_exposition() {
        let metrics = HttpMetrics::new();
        metrics.record("POST", "/auth", 200, 0.2);

        let out = render(&metrics);
        let labels = "method=\"POST\",route=\"/auth\",code=\"200\"";
        assert!(out.contains("# TYPE http_request_duration_seconds histogram"));
        // 0.2s misses the 0.1 bucket, lands in every later one
        assert!(out.contains(&format!(
            "http_request_duration_seconds_bucket{{{labels},le=\"0.1\"}} 0"
        )));
        assert!(out.contains(&format!(
            "http_request_duration_seconds_bucket{{{labels},le=\"0.3\"}} 1"
        )));
        assert!(out.contains(&format!(
            "http_request_duration_seconds_bucket{{{labels},le=\"5\"}} 1"
        )));
        assert!(out.contains(&format!(
            "http_request_duration_seconds_bucket{{{labels},le=\"+Inf\"}} 1"
        )));
        assert!(out.contains(&format!(
            "http_request_duration_seconds_count{{{labels}}} 1"
        )));
    }

    #[test]
    fn test_format_bound() {
        assert_eq!(format_bound(0.1), "0.1");
        assert_eq!(format_bound(0.3), "0.3");
        assert_eq!(format_bound(1.0), "1");
        assert_eq!(format_bound(5.0), "5");
    }

    #[test]
    fn test_render_is_read_only() {
        let metrics = HttpMetrics::new();
        metrics.record("GET", "/", 200, 0.01);

        let first = render(&metrics);
        let second = render(&metrics);
        assert_eq!(first, second);
        assert_eq!(metrics.requests().total(), 1);
    }
}
