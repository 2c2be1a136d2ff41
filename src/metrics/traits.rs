//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and export are kept in separate small traits so
//! cache logic only ever *writes* counters and monitoring code only ever
//! *reads* them.
//!
//! ```text
//!            ┌─────────────────────────────┐
//!            │     CoreMetricsRecorder     │
//!            │  get_hit/get_miss/insert    │
//!            │  evicted_entry/clear        │
//!            └──────────────┬──────────────┘
//!                           │
//!                           ▼
//!            ┌─────────────────────────────┐     ┌─────────────────────────────┐
//!            │   RingLruMetricsRecorder    │     │ RingLruMetricsReadRecorder  │
//!            │  promotion/remove (&mut)    │     │  peek/contains (&self)      │
//!            └─────────────────────────────┘     └─────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Common counters for any cache policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Ring-specific counters recorded on `&mut self` paths.
pub trait RingLruMetricsRecorder: CoreMetricsRecorder {
    /// A promotion was attempted (every hit and every update).
    fn record_promotion_call(&mut self);
    /// The promotion moved the entry closer to the head.
    fn record_promotion_move(&mut self);
    /// The move displaced another live entry (as opposed to a hole).
    fn record_promotion_swap(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
}

/// Ring-specific counters recorded on `&self` paths (interior mutability).
pub trait RingLruMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_hit(&self);
    fn record_contains_call(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
