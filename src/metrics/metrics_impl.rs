use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{
    CoreMetricsRecorder, RingLruMetricsReadRecorder, RingLruMetricsRecorder,
};

/// Counter block embedded in [`RingLruCore`](crate::policy::ring_lru::RingLruCore).
#[derive(Debug, Default)]
pub struct RingLruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evicted_entries: u64,
    pub promotion_calls: u64,
    pub promotion_moves: u64,
    pub promotion_swaps: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub clears: u64,
    pub peek_calls: MetricsCell,
    pub peek_hits: MetricsCell,
    pub contains_calls: MetricsCell,
}

impl RingLruMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl CoreMetricsRecorder for RingLruMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl RingLruMetricsRecorder for RingLruMetrics {
    fn record_promotion_call(&mut self) {
        self.promotion_calls += 1;
    }

    fn record_promotion_move(&mut self) {
        self.promotion_moves += 1;
    }

    fn record_promotion_swap(&mut self) {
        self.promotion_swaps += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }
}

impl RingLruMetricsReadRecorder for RingLruMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_hit(&self) {
        self.peek_hits.incr();
    }

    fn record_contains_call(&self) {
        self.contains_calls.incr();
    }
}
