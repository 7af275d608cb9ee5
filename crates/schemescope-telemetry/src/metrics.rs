//! Metrics collection and reporting

use schemescope_core::ErrorKind;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcomeKind {
    Resolved,
    NotFound,
    Failed(ErrorKind),
}

impl SearchOutcomeKind {
    /// Stable label used for metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::NotFound => "not_found",
            Self::Failed(_) => "failed",
        }
    }
}

/// Metrics collector for SchemeScope searches
#[derive(Clone)]
pub struct MetricsCollector {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    total_searches: AtomicU64,
    voice_searches: AtomicU64,
    resolved: AtomicU64,
    not_found: AtomicU64,
    fetch_failures: AtomicU64,
    other_failures: AtomicU64,
    generation_failures: AtomicU64,
    stale_discards: AtomicU64,
    comments_classified: AtomicU64,
    total_latency_us: AtomicU64,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                total_searches: AtomicU64::new(0),
                voice_searches: AtomicU64::new(0),
                resolved: AtomicU64::new(0),
                not_found: AtomicU64::new(0),
                fetch_failures: AtomicU64::new(0),
                other_failures: AtomicU64::new(0),
                generation_failures: AtomicU64::new(0),
                stale_discards: AtomicU64::new(0),
                comments_classified: AtomicU64::new(0),
                total_latency_us: AtomicU64::new(0),
            }),
        }
    }

    /// Record a search and how it ended
    pub fn record_search(&self, outcome: SearchOutcomeKind, is_voice_input: bool, latency_us: u64) {
        self.inner.total_searches.fetch_add(1, Ordering::Relaxed);
        if is_voice_input {
            self.inner.voice_searches.fetch_add(1, Ordering::Relaxed);
        }

        let counter = match outcome {
            SearchOutcomeKind::Resolved => &self.inner.resolved,
            SearchOutcomeKind::NotFound => &self.inner.not_found,
            SearchOutcomeKind::Failed(ErrorKind::Fetch) => &self.inner.fetch_failures,
            SearchOutcomeKind::Failed(_) => &self.inner.other_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        self.inner
            .total_latency_us
            .fetch_add(latency_us, Ordering::Relaxed);
    }

    /// Record a summary/report generation failure
    pub fn record_generation_failure(&self) {
        self.inner
            .generation_failures
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a result dropped because a newer search had started
    pub fn record_stale_discard(&self) {
        self.inner.stale_discards.fetch_add(1, Ordering::Relaxed);
    }

    /// Record comments classified
    pub fn record_comments(&self, count: u64) {
        self.inner
            .comments_classified
            .fetch_add(count, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_searches: self.inner.total_searches.load(Ordering::Relaxed),
            voice_searches: self.inner.voice_searches.load(Ordering::Relaxed),
            resolved: self.inner.resolved.load(Ordering::Relaxed),
            not_found: self.inner.not_found.load(Ordering::Relaxed),
            fetch_failures: self.inner.fetch_failures.load(Ordering::Relaxed),
            other_failures: self.inner.other_failures.load(Ordering::Relaxed),
            generation_failures: self.inner.generation_failures.load(Ordering::Relaxed),
            stale_discards: self.inner.stale_discards.load(Ordering::Relaxed),
            comments_classified: self.inner.comments_classified.load(Ordering::Relaxed),
            total_latency_us: self.inner.total_latency_us.load(Ordering::Relaxed),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub total_searches: u64,
    pub voice_searches: u64,
    pub resolved: u64,
    pub not_found: u64,
    pub fetch_failures: u64,
    pub other_failures: u64,
    pub generation_failures: u64,
    pub stale_discards: u64,
    pub comments_classified: u64,
    pub total_latency_us: u64,
}

impl MetricsSnapshot {
    /// Calculate average latency per search
    pub fn avg_latency_us(&self) -> u64 {
        if self.total_searches == 0 {
            0
        } else {
            self.total_latency_us / self.total_searches
        }
    }

    /// Fraction of searches that resolved to a scheme
    pub fn resolve_rate(&self) -> f64 {
        if self.total_searches == 0 {
            0.0
        } else {
            self.resolved as f64 / self.total_searches as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_collection() {
        let metrics = MetricsCollector::new();

        metrics.record_search(SearchOutcomeKind::Resolved, false, 4000);
        metrics.record_search(SearchOutcomeKind::NotFound, true, 1000);
        metrics.record_search(SearchOutcomeKind::Failed(ErrorKind::Fetch), false, 1000);
        metrics.record_comments(5);
        metrics.record_generation_failure();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_searches, 3);
        assert_eq!(snapshot.voice_searches, 1);
        assert_eq!(snapshot.resolved, 1);
        assert_eq!(snapshot.not_found, 1);
        assert_eq!(snapshot.fetch_failures, 1);
        assert_eq!(snapshot.comments_classified, 5);
        assert_eq!(snapshot.generation_failures, 1);
        assert_eq!(snapshot.avg_latency_us(), 2000);
        assert!((snapshot.resolve_rate() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MetricsCollector::new().snapshot();
        assert_eq!(snapshot.avg_latency_us(), 0);
        assert_eq!(snapshot.resolve_rate(), 0.0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = MetricsCollector::new();
        let clone = metrics.clone();
        clone.record_stale_discard();
        assert_eq!(metrics.snapshot().stale_discards, 1);
    }
}
