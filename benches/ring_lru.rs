use std::hint::black_box;
use std::sync::Arc;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ringlru::policy::ring_lru::RingLruCore;

const CAPACITY: usize = 4096;

fn warmed(capacity: usize) -> RingLruCore<u64, Arc<u64>> {
    let mut cache = RingLruCore::new(capacity);
    for i in 0..capacity as u64 {
        cache.add(i, Arc::new(i));
    }
    cache
}

fn bench_ring_lru_add_get(c: &mut Criterion) {
    c.bench_function("ring_lru_add_get", |b| {
        b.iter_batched(
            || warmed(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.add(black_box(i + 10_000), Arc::new(i));
                    let _ = black_box(cache.get(&black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_ring_lru_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_lru_get_hit");
    group.throughput(Throughput::Elements(CAPACITY as u64));
    group.bench_function("promote", |b| {
        b.iter_batched(
            || warmed(CAPACITY),
            |mut cache| {
                for i in 0..CAPACITY as u64 {
                    let _ = black_box(cache.get(&black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("peek", |b| {
        let cache = warmed(CAPACITY);
        b.iter(|| {
            for i in 0..CAPACITY as u64 {
                let _ = black_box(cache.peek(&black_box(i)));
            }
        })
    });
    group.finish();
}

fn bench_ring_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("ring_lru_eviction_churn", |b| {
        b.iter_batched(
            || warmed(1024),
            |mut cache| {
                for i in 0..4096u64 {
                    cache.add(black_box(10_000 + i), Arc::new(i));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_ring_lru_hotset(c: &mut Criterion) {
    c.bench_function("ring_lru_hotset_90_10", |b| {
        b.iter_batched(
            || (warmed(CAPACITY), StdRng::seed_from_u64(42)),
            |(mut cache, mut rng)| {
                let universe = CAPACITY as u64 * 4;
                let hot = universe / 10;
                for _ in 0..CAPACITY {
                    let key = if rng.random_bool(0.9) {
                        rng.random_range(0..hot)
                    } else {
                        rng.random_range(hot..universe)
                    };
                    if cache.get(&key).is_none() {
                        cache.add(key, Arc::new(key));
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
}

#[cfg(feature = "concurrency")]
fn bench_concurrent_ring_lru(c: &mut Criterion) {
    use ringlru::policy::ring_lru::ConcurrentRingLruCache;

    c.bench_function("concurrent_ring_lru_add_get", |b| {
        b.iter_batched(
            || ConcurrentRingLruCache::from_core(warmed(1024)),
            |cache| {
                for i in 0..1024u64 {
                    cache.add(black_box(i + 10_000), Arc::new(i));
                    let _ = black_box(cache.get(&black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

#[cfg(not(feature = "concurrency"))]
fn bench_concurrent_ring_lru(_c: &mut Criterion) {}

criterion_group!(
    benches,
    bench_ring_lru_add_get,
    bench_ring_lru_get_hit,
    bench_ring_lru_eviction_churn,
    bench_ring_lru_hotset,
    bench_concurrent_ring_lru
);
criterion_main!(benches);
