//! Optional operation counters for the ring cache (feature `metrics`).

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use snapshot::RingLruMetricsSnapshot;
pub use traits::{MetricsExporter, MetricsSnapshotProvider};
