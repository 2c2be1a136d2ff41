/// Point-in-time copy of a ring cache's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RingLruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evicted_entries: u64,

    pub promotion_calls: u64,
    pub promotion_moves: u64,
    pub promotion_swaps: u64, // moves that displaced a live entry rather than a hole

    pub remove_calls: u64,
    pub remove_found: u64,
    pub clears: u64,

    pub peek_calls: u64,
    pub peek_hits: u64,
    pub contains_calls: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
    pub ring_holes: usize,
}

impl RingLruMetricsSnapshot {
    /// Fraction of `get` calls that hit, or 0.0 before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
