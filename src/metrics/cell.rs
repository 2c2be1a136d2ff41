use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for `&self` code paths.
///
/// Read-only cache operations run under a shared lock, so several threads may
/// bump the same counter at once. Relaxed atomics keep that race-free; the
/// counts are observational and never feed back into cache decisions.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(AtomicU64);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn incr(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}
