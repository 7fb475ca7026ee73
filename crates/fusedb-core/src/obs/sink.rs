//! Metrics sink boundary.
//!
//! Fusion logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.

use crate::{fusion::IndexSlot, obs::metrics};

///
/// FanOutKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FanOutKind {
    State,
    Failure,
    Sample,
    Bless,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    Routed { slot: IndexSlot },
    FanOut { kind: FanOutKind },
    BlessRejected { slot: IndexSlot },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default process-local sink that writes into global metrics state.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::Routed { slot } => metrics::with_state_mut(|m| {
                let counter = &mut m.routed[slot.ordinal()];
                *counter = counter.saturating_add(1);
            }),
            MetricsEvent::FanOut { kind } => metrics::with_state_mut(|m| {
                let counter = match kind {
                    FanOutKind::State => &mut m.state_queries,
                    FanOutKind::Failure => &mut m.failure_queries,
                    FanOutKind::Sample => &mut m.sample_queries,
                    FanOutKind::Bless => &mut m.bless_calls,
                };
                *counter = counter.saturating_add(1);
            }),
            // slot is carried for custom sinks; the global state only
            // counts rejections.
            MetricsEvent::BlessRejected { .. } => metrics::with_state_mut(|m| {
                m.bless_rejections = m.bless_rejections.saturating_add(1);
            }),
        }
    }
}

/// Record through the global process-local sink.
pub(crate) fn record_event(event: MetricsEvent) {
    GlobalMetricsSink.record(event);
}

/// Snapshot the process-local metrics.
#[must_use]
pub fn metrics_report() -> metrics::MetricsReport {
    metrics::report()
}

/// Reset all process-local metrics to zero.
pub fn metrics_reset_all() {
    metrics::reset_all();
}
