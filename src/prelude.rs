pub use crate::ds::{Promotion, RecencyRing, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::RingLruMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::{MetricsExporter, MetricsSnapshotProvider, PrometheusTextExporter};
#[cfg(feature = "concurrency")]
pub use crate::policy::ring_lru::ConcurrentRingLruCache;
pub use crate::policy::ring_lru::RingLruCore;
#[cfg(feature = "concurrency")]
pub use crate::traits::ConcurrentCache;
pub use crate::traits::ApproxLruCache;
