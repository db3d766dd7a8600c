//! Metrics sink boundary.
//!
//! Key resolution and encoding MUST NOT touch obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = const { RefCell::new(None) };
}

///
/// RejectKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RejectKind {
    UnsupportedKeyType,
    ShapeMismatch,
    InvalidPrefix,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    KeyResolved,
    KeyMissing,
    KeyEncoded { arity: usize },
    BatchEncoded { keys: u64 },
    EncodeRejected { kind: RejectKind },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| {
            let ops = &mut m.ops;
            match event {
                MetricsEvent::KeyResolved => {
                    ops.keys_resolved = ops.keys_resolved.saturating_add(1);
                }
                MetricsEvent::KeyMissing => {
                    ops.keys_missing = ops.keys_missing.saturating_add(1);
                }
                MetricsEvent::KeyEncoded { arity } if arity > 1 => {
                    ops.compound_keys_encoded = ops.compound_keys_encoded.saturating_add(1);
                }
                MetricsEvent::KeyEncoded { .. } => {
                    ops.simple_keys_encoded = ops.simple_keys_encoded.saturating_add(1);
                }
                MetricsEvent::BatchEncoded { keys } => {
                    ops.batches_encoded = ops.batches_encoded.saturating_add(1);
                    ops.batch_keys_encoded = ops.batch_keys_encoded.saturating_add(keys);
                }
                MetricsEvent::EncodeRejected { kind } => match kind {
                    RejectKind::UnsupportedKeyType => {
                        ops.unsupported_key_types = ops.unsupported_key_types.saturating_add(1);
                    }
                    RejectKind::ShapeMismatch => {
                        ops.shape_mismatches = ops.shape_mismatches.saturating_add(1);
                    }
                    RejectKind::InvalidPrefix => {
                        ops.invalid_prefixes = ops.invalid_prefixes.saturating_add(1);
                    }
                },
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a live `&dyn MetricsSink` in `with_metrics_sink`,
        //   which restores the previous slot on every exit, unwinding included.
        // - `record` is synchronous and never keeps `ptr` past this call.
        // - Only a shared reference is materialized, matching the original borrow.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the calling thread's metrics counters.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset the calling thread's metrics counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override on this thread.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - The erased pointer is installed only for the dynamic scope of `f`.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` dereferences synchronously and never persists the pointer.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CaptureSink {
        events: RefCell<Vec<MetricsEvent>>,
    }

    impl MetricsSink for CaptureSink {
        fn record(&self, event: MetricsEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn override_captures_events_and_bypasses_global_state() {
        metrics_reset_all();
        let sink = CaptureSink::default();

        with_metrics_sink(&sink, || {
            record(MetricsEvent::KeyEncoded { arity: 2 });
            record(MetricsEvent::KeyMissing);
        });

        assert_eq!(
            *sink.events.borrow(),
            vec![
                MetricsEvent::KeyEncoded { arity: 2 },
                MetricsEvent::KeyMissing,
            ]
        );
        assert_eq!(metrics_report().counters, metrics::EventOps::default());
    }

    #[test]
    fn override_is_restored_after_panic() {
        metrics_reset_all();
        let sink = CaptureSink::default();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            with_metrics_sink(&sink, || panic!("boom"));
        }));
        assert!(result.is_err());

        record(MetricsEvent::KeyResolved);
        assert!(sink.events.borrow().is_empty());
        assert_eq!(metrics_report().counters.keys_resolved, 1);
    }

    #[test]
    fn global_sink_splits_simple_and_compound_counts() {
        metrics_reset_all();

        record(MetricsEvent::KeyEncoded { arity: 1 });
        record(MetricsEvent::KeyEncoded { arity: 3 });
        record(MetricsEvent::BatchEncoded { keys: 4 });
        record(MetricsEvent::EncodeRejected {
            kind: RejectKind::ShapeMismatch,
        });

        let counters = metrics_report().counters;
        assert_eq!(counters.simple_keys_encoded, 1);
        assert_eq!(counters.compound_keys_encoded, 1);
        assert_eq!(counters.batches_encoded, 1);
        assert_eq!(counters.batch_keys_encoded, 4);
        assert_eq!(counters.shape_mismatches, 1);
    }

    #[test]
    fn reset_stamps_report_with_wall_clock_millis() {
        let before = chrono::Utc::now().timestamp_millis();
        metrics_reset_all();
        let after = chrono::Utc::now().timestamp_millis();

        let since_ms = metrics_report().since_ms;
        assert!((before..=after).contains(&since_ms));
    }
}
