//! SchemeScope Telemetry
//!
//! In-process counters for searches and their outcomes.
//!
//! Prometheus export is handled by the server through the `metrics` facade;
//! this crate keeps the cheap atomic snapshot served at `/v1/stats`.

pub mod metrics;

pub use metrics::{MetricsCollector, MetricsSnapshot, SearchOutcomeKind};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::metrics::{MetricsCollector, MetricsSnapshot, SearchOutcomeKind};
}
