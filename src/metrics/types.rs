//! Metric primitives
//!
//! Thread-safe counter and histogram keyed by a preformatted label string
//! (`method="GET",route="/auth",code="200"`). Increments on an existing
//! label set take only a read lock plus an atomic add; the write lock is
//! held just long enough to insert a new label set.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing counter with labeled sub-series.
#[derive(Debug, Default)]
pub struct LabeledCounter {
    series: RwLock<HashMap<String, AtomicU64>>,
}

impl LabeledCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for the given label set by 1.
    pub fn inc(&self, labels: &str) {
        self.add(labels, 1);
    }

    /// Add to the counter for the given label set.
    pub fn add(&self, labels: &str, value: u64) {
        {
            let series = self.series.read();
            if let Some(cell) = series.get(labels) {
                cell.fetch_add(value, Ordering::Relaxed);
                return;
            }
        }

        let mut series = self.series.write();
        series
            .entry(labels.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(value, Ordering::Relaxed);
    }

    /// Current value for a label set, 0 if never incremented.
    pub fn get(&self, labels: &str) -> u64 {
        let series = self.series.read();
        series
            .get(labels)
            .map(|v| v.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// All label sets with their current values.
    pub fn snapshot(&self) -> Vec<(String, u64)> {
        let series = self.series.read();
        series
            .iter()
            .map(|(k, v)| (k.clone(), v.load(Ordering::Relaxed)))
            .collect()
    }

    /// Sum of all sub-series.
    pub fn total(&self) -> u64 {
        let series = self.series.read();
        series.values().map(|v| v.load(Ordering::Relaxed)).sum()
    }
}

/// Distribution of observed values over fixed bucket boundaries.
///
/// Bucket counts are cumulative, matching the Prometheus histogram model:
/// an observation increments every bucket whose upper bound it does not
/// exceed, plus the series sum and count.
#[derive(Debug)]
pub struct Histogram {
    bounds: Vec<f64>,
    series: RwLock<HashMap<String, HistogramCell>>,
}

#[derive(Debug)]
struct HistogramCell {
    bucket_hits: Vec<AtomicU64>,
    count: AtomicU64,
    sum: Mutex<f64>,
}

impl HistogramCell {
    fn new(bucket_count: usize) -> Self {
        Self {
            bucket_hits: (0..bucket_count).map(|_| AtomicU64::new(0)).collect(),
            count: AtomicU64::new(0),
            sum: Mutex::new(0.0),
        }
    }

    fn record(&self, bounds: &[f64], value: f64) {
        for (i, bound) in bounds.iter().enumerate() {
            if value <= *bound {
                self.bucket_hits[i].fetch_add(1, Ordering::Relaxed);
            }
        }
        self.count.fetch_add(1, Ordering::Relaxed);
        *self.sum.lock() += value;
    }
}

impl Histogram {
    /// Create a histogram with the given ascending bucket boundaries.
    pub fn new(bounds: &[f64]) -> Self {
        Self {
            bounds: bounds.to_vec(),
            series: RwLock::new(HashMap::new()),
        }
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Record one observation for the given label set.
    pub fn observe(&self, labels: &str, value: f64) {
        {
            let series = self.series.read();
            if let Some(cell) = series.get(labels) {
                cell.record(&self.bounds, value);
                return;
            }
        }

        let mut series = self.series.write();
        series
            .entry(labels.to_string())
            .or_insert_with(|| HistogramCell::new(self.bounds.len()))
            .record(&self.bounds, value);
    }

    /// Total observation count for a label set.
    pub fn count(&self, labels: &str) -> u64 {
        let series = self.series.read();
        series
            .get(labels)
            .map(|c| c.count.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Per-label-set data for exposition.
    pub fn snapshot(&self) -> Vec<HistogramSnapshot> {
        let series = self.series.read();
        series
            .iter()
            .map(|(labels, cell)| HistogramSnapshot {
                labels: labels.clone(),
                cumulative: cell
                    .bucket_hits
                    .iter()
                    .map(|c| c.load(Ordering::Relaxed))
                    .collect(),
                sum: *cell.sum.lock(),
                count: cell.count.load(Ordering::Relaxed),
            })
            .collect()
    }
}

/// One label set's histogram state at a point in time.
#[derive(Debug, Clone)]
pub struct HistogramSnapshot {
    pub labels: String,
    /// Cumulative count per bucket, aligned with the histogram's bounds
    pub cumulative: Vec<u64>,
    pub sum: f64,
    pub count: u64,
}
