//! DHAT heap profiler for ringlru.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::sync::Arc;

use ringlru::policy::ring_lru::RingLruCore;
use ringlru::traits::ApproxLruCache;

const CAPACITY: usize = 4096;
const OPERATIONS: usize = 100_000;
const UNIVERSE: u64 = 16_384;

/// XorShift64 keeps the workload deterministic without pulling rand into the binary.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// 90% of accesses hit 10% of keys.
fn hotset_workload<C: ApproxLruCache<u64, Arc<u64>>>(cache: &mut C, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let hot_size = UNIVERSE / 10;

    for _ in 0..OPERATIONS {
        let key = if rng.next_u64() % 10 != 0 {
            rng.next_u64() % hot_size
        } else {
            hot_size + (rng.next_u64() % (UNIVERSE - hot_size))
        };
        if cache.get(&key).is_none() {
            cache.add(key, Arc::new(key));
        }
    }
}

fn scan_workload<C: ApproxLruCache<u64, Arc<u64>>>(cache: &mut C) {
    for i in 0..OPERATIONS / 2 {
        let key = (i as u64) % UNIVERSE;
        if cache.get(&key).is_none() {
            cache.add(key, Arc::new(key));
        }
    }
}

/// Remove a slice of keys, then refill so the head walks over the holes.
fn hole_churn<C: ApproxLruCache<u64, Arc<u64>>>(cache: &mut C) {
    for key in 0..UNIVERSE {
        if key % 3 == 0 {
            cache.remove(&key);
        }
    }
    for i in 0..OPERATIONS / 4 {
        let key = UNIVERSE + i as u64;
        cache.add(key, Arc::new(key));
    }
}

fn profile_engine() {
    println!("=== Profiling RingLruCore ===");
    let mut cache = RingLruCore::new(CAPACITY);

    for i in 0..CAPACITY as u64 {
        cache.add(i, Arc::new(i));
    }

    hotset_workload(&mut cache, 42);
    scan_workload(&mut cache);
    hole_churn(&mut cache);

    println!("  Final size: {}", cache.len());
}

#[cfg(feature = "concurrency")]
fn profile_concurrent() {
    use ringlru::policy::ring_lru::ConcurrentRingLruCache;

    println!("=== Profiling ConcurrentRingLruCache ===");
    let mut cache = ConcurrentRingLruCache::new(CAPACITY);

    hotset_workload(&mut cache, 7);
    hole_churn(&mut cache);

    println!("  Final size: {}", cache.len());
}

#[cfg(not(feature = "concurrency"))]
fn profile_concurrent() {}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("ringlru DHAT Heap Profiling");
    println!("===========================\n");

    profile_engine();
    profile_concurrent();

    println!("\n===========================");
    println!("Profile written to dhat-heap.json");
}
