//! Observability: runtime telemetry (metrics) and sink abstractions.
//!
//! Counters are thread-local and never feed back into encoding results.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport};
pub use sink::{
    MetricsEvent, MetricsSink, RejectKind, metrics_report, metrics_reset_all, with_metrics_sink,
};
