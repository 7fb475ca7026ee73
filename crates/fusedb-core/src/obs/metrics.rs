use crate::fusion::SLOT_COUNT;
use serde::Serialize;
use std::cell::RefCell;

///
/// MetricsReport
///
/// Point-in-time snapshot of the process-local routing/merge counters.
/// Doubles as the accumulation state.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Single-slot routing decisions, indexed by slot ordinal.
    pub routed: [u64; SLOT_COUNT],
    pub state_queries: u64,
    pub failure_queries: u64,
    pub sample_queries: u64,
    pub bless_calls: u64,
    pub bless_rejections: u64,
}

thread_local! {
    static STATE: RefCell<MetricsReport> = RefCell::new(MetricsReport::default());
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut MetricsReport) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

pub(crate) fn report() -> MetricsReport {
    STATE.with(|state| state.borrow().clone())
}

pub(crate) fn reset_all() {
    with_state_mut(|state| *state = MetricsReport::default());
}
