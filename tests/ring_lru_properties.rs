// ==============================================
// RING LRU PROPERTY TESTS (integration)
// ==============================================
//
// Randomized operation sequences against the single-threaded engine. Each
// test is seeded so failures reproduce.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ringlru::policy::ring_lru::RingLruCore;
use ringlru::traits::ApproxLruCache;

fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn bit_length(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

mod capacity {
    use super::*;

    #[test]
    fn test_len_never_exceeds_capacity() {
        init_logging();
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for capacity in [1usize, 2, 3, 7, 64, 129] {
            let mut cache = RingLruCore::new(capacity);
            for step in 0..5_000u32 {
                let key = rng.random_range(0..capacity as u32 * 3);
                match rng.random_range(0..10) {
                    0..=4 => {
                        cache.add(key, step);
                    },
                    5..=7 => {
                        cache.get(&key);
                    },
                    8 => {
                        cache.remove(&key);
                    },
                    _ => {
                        cache.contains_or_add(key, step);
                    },
                }
                assert!(cache.len() <= capacity);
            }
            assert_eq!(cache.check_invariants(), Ok(()));
        }
    }

    #[test]
    fn test_add_result_matches_len_change() {
        let mut rng = StdRng::seed_from_u64(17);
        let capacity = 16;
        let mut cache = RingLruCore::new(capacity);

        for step in 0..4_000u32 {
            let key = rng.random_range(0..48u32);
            if rng.random_bool(0.2) {
                cache.remove(&key);
                continue;
            }

            let was_resident = cache.contains(&key);
            let before = cache.len();
            let reported = cache.add(key, step);
            let after = cache.len();

            if was_resident {
                assert!(!reported, "update of {} reported an eviction", key);
                assert_eq!(before, after);
            } else {
                // A new key either replaced a victim (len unchanged) or took
                // an empty slot; only reaching capacity counts in that case.
                let evicted = after == before;
                assert_eq!(reported, evicted || after == capacity);
            }
        }
    }

    #[test]
    fn test_sequential_fill_keeps_newest_window() {
        for capacity in [1usize, 5, 128] {
            let mut cache = RingLruCore::new(capacity);
            let total = capacity * 2;
            for key in 0..total {
                cache.add(key, ());
            }
            assert_eq!(cache.len(), capacity);
            let keys: HashSet<_> = cache.keys().into_iter().collect();
            let expected: HashSet<_> = (total - capacity..total).collect();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn test_untouched_entry_survives_exactly_capacity_minus_one_inserts() {
        let mut rng = StdRng::seed_from_u64(99);
        let capacity = 32;
        let mut cache = RingLruCore::new(capacity);

        // Arbitrary history with holes and promotions.
        for _ in 0..500 {
            let key = rng.random_range(0..100u64);
            match rng.random_range(0..3) {
                0 => {
                    cache.add(key, key);
                },
                1 => {
                    cache.get(&key);
                },
                _ => {
                    cache.remove(&key);
                },
            }
        }

        let tracked = 1_000_000u64;
        cache.add(tracked, 0);
        for fresh in 0..capacity as u64 - 1 {
            cache.add(2_000_000 + fresh, 0);
            assert!(cache.contains(&tracked));
        }
        cache.add(3_000_000, 0);
        assert!(!cache.contains(&tracked));
    }
}

mod lookups {
    use super::*;

    #[test]
    fn test_peek_contains_and_get_agree() {
        let mut rng = StdRng::seed_from_u64(4242);
        let mut cache = RingLruCore::new(20);

        for step in 0..2_000u32 {
            let key = rng.random_range(0..60u32);
            if rng.random_bool(0.5) {
                cache.add(key, step);
            }

            let probe = rng.random_range(0..60u32);
            let contained = cache.contains(&probe);
            let peeked = cache.peek(&probe).copied();
            assert_eq!(contained, peeked.is_some());

            let got = cache.get(&probe).copied();
            assert_eq!(got, peeked);
        }
    }

    #[test]
    fn test_add_then_get_returns_latest_value() {
        let mut cache = RingLruCore::new(8);
        for round in 0..10u32 {
            for key in 0..8u32 {
                cache.add(key, key * 100 + round);
            }
            for key in 0..8u32 {
                assert_eq!(cache.get(&key), Some(&(key * 100 + round)));
            }
        }
    }

    #[test]
    fn test_remove_then_absent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cache = RingLruCore::new(50);
        for key in 0..50u32 {
            cache.add(key, key);
        }

        let mut removed = HashSet::new();
        for _ in 0..25 {
            let key = rng.random_range(0..50u32);
            let resident = !removed.contains(&key);
            assert_eq!(cache.remove(&key), resident);
            removed.insert(key);

            assert!(!cache.contains(&key));
            assert_eq!(cache.peek(&key), None);
            assert_eq!(cache.get(&key), None);
        }
        assert_eq!(cache.len(), 50 - removed.len());
        assert_eq!(cache.check_invariants(), Ok(()));
    }

    #[test]
    fn test_purge_empties_everything() {
        let mut cache = RingLruCore::new(10);
        for key in 0..25u32 {
            cache.add(key, key);
        }
        cache.purge();
        assert!(cache.is_empty());
        assert!(cache.keys().is_empty());
        for key in 0..25u32 {
            assert!(!cache.contains(&key));
        }

        // Refilling behaves like a fresh cache.
        for key in 0..9u32 {
            assert!(!cache.add(key, key));
        }
        assert!(cache.add(9, 9));
    }
}

mod promotion {
    use super::*;

    #[test]
    fn test_repeated_gets_reach_head_in_bit_length_steps() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..50 {
            let capacity = rng.random_range(2..300usize);
            let mut cache = RingLruCore::new(capacity);
            for key in 0..capacity {
                cache.add(key, ());
            }

            let key = rng.random_range(0..capacity);
            let start = cache.distance(&key).unwrap();
            let mut steps = 0;
            let mut previous = start;
            while cache.distance(&key) != Some(0) {
                cache.get(&key);
                let now = cache.distance(&key).unwrap();
                assert_eq!(now, previous / 2);
                previous = now;
                steps += 1;
            }
            assert_eq!(steps, bit_length(start));
        }
    }

    #[test]
    fn test_hundred_slot_entry_takes_seven_gets() {
        let mut cache = RingLruCore::new(128);
        for key in 0..128u32 {
            cache.add(key, key);
        }
        assert_eq!(cache.distance(&27), Some(100));
        for _ in 0..7 {
            cache.get(&27);
        }
        assert_eq!(cache.distance(&27), Some(0));
    }

    #[test]
    fn test_hot_keys_survive_scan() {
        let capacity = 64;
        let mut cache = RingLruCore::new(capacity);
        let hot: Vec<u32> = (0..8).collect();
        for &key in &hot {
            cache.add(key, key);
        }

        // Interleave a long scan of cold keys with hits on the hot set.
        for cold in 1_000..1_000 + capacity as u32 * 4 {
            cache.add(cold, cold);
            for &key in &hot {
                cache.get(&key);
            }
        }
        for &key in &hot {
            assert!(cache.contains(&key), "hot key {} was evicted", key);
        }
    }
}

mod contract {
    use super::*;

    fn churn<C: ApproxLruCache<u64, u64>>(cache: &mut C, seed: u64) -> usize {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut hits = 0;
        for step in 0..3_000u64 {
            let key = rng.random_range(0..200u64);
            if cache.get(&key).is_some() {
                hits += 1;
            } else {
                cache.add(key, step);
            }
            assert!(cache.len() <= cache.capacity());
        }
        hits
    }

    #[test]
    fn test_engine_through_contract() {
        let mut cache = RingLruCore::new(50);
        let hits = churn(&mut cache, 11);
        assert!(hits > 0);
        assert_eq!(cache.len(), 50);
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn test_wrapper_matches_engine_through_contract() {
        use ringlru::policy::ring_lru::ConcurrentRingLruCache;

        let mut engine = RingLruCore::new(50);
        let mut wrapper = ConcurrentRingLruCache::new(50);
        assert_eq!(churn(&mut engine, 11), churn(&mut wrapper, 11));

        let mut engine_keys = ApproxLruCache::keys(&engine);
        let mut wrapper_keys = ApproxLruCache::keys(&wrapper);
        engine_keys.sort_unstable();
        wrapper_keys.sort_unstable();
        assert_eq!(engine_keys, wrapper_keys);
    }
}
