//! Metrics registry for the sales service
//!
//! - Counters reset only on process start
//! - Thread-safe, lock-free increments

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters
///
/// Uses Relaxed ordering; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    uploads_accepted: AtomicU64,
    uploads_rejected: AtomicU64,
    queries_executed: AtomicU64,
    queries_rejected: AtomicU64,
    /// Rows in the active dataset (current, not cumulative)
    rows_loaded: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted upload and the new row count
    pub fn record_upload(&self, rows: usize) {
        self.uploads_accepted.fetch_add(1, Ordering::Relaxed);
        self.rows_loaded.store(rows as u64, Ordering::Relaxed);
    }

    pub fn increment_uploads_rejected(&self) {
        self.uploads_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_queries_rejected(&self) {
        self.queries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uploads_accepted: self.uploads_accepted.load(Ordering::Relaxed),
            uploads_rejected: self.uploads_rejected.load(Ordering::Relaxed),
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_rejected: self.queries_rejected.load(Ordering::Relaxed),
            rows_loaded: self.rows_loaded.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub uploads_accepted: u64,
    pub uploads_rejected: u64,
    pub queries_executed: u64,
    pub queries_rejected: u64,
    pub rows_loaded: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(MetricsRegistry::new().snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_upload_replaces_row_count() {
        let metrics = MetricsRegistry::new();
        metrics.record_upload(5);
        metrics.record_upload(2);
        metrics.increment_uploads_rejected();

        let snap = metrics.snapshot();
        assert_eq!(snap.uploads_accepted, 2);
        assert_eq!(snap.uploads_rejected, 1);
        assert_eq!(snap.rows_loaded, 2);
    }

    #[test]
    fn test_query_counters() {
        let metrics = MetricsRegistry::new();
        metrics.increment_queries_executed();
        metrics.increment_queries_executed();
        metrics.increment_queries_rejected();

        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["queries_executed"], 2);
        assert_eq!(json["queries_rejected"], 1);
    }
}
