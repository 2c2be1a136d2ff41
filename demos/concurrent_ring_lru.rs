use std::sync::Arc;
use std::thread;

use ringlru::policy::ring_lru::ConcurrentRingLruCache;

fn main() {
    let cache: ConcurrentRingLruCache<u64, Arc<String>> = ConcurrentRingLruCache::new(64);

    let handles: Vec<_> = (0..4u64)
        .map(|worker| {
            let cache = cache.clone();
            thread::spawn(move || {
                let mut hits = 0;
                for i in 0..1_000u64 {
                    let key = (worker * 7 + i) % 96;
                    if cache.get(&key).is_some() {
                        hits += 1;
                    } else {
                        cache.contains_or_add(key, Arc::new(format!("value-{}", key)));
                    }
                }
                hits
            })
        })
        .collect();

    let hits: u64 = handles.into_iter().map(|h| h.join().unwrap_or(0)).sum();

    println!("total hits: {}", hits);
    println!("len: {} / capacity: {}", cache.len(), cache.capacity());
    println!(
        "value for 0: {:?}",
        cache.peek_with(&0, |value| value.len())
    );
}

// Expected output (hit count varies with scheduling):
// total hits: ...
// len: 64 / capacity: 64
// value for 0: ...
