//! Observability: routing/merge telemetry and sink abstractions.
//!
//! Metrics are advisory only and must never affect routing or merge
//! semantics.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::MetricsReport;
pub use sink::{FanOutKind, MetricsEvent, MetricsSink, metrics_report, metrics_reset_all};

pub(crate) use sink::record_event;
