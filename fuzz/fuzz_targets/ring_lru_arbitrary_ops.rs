#![no_main]

use libfuzzer_sys::fuzz_target;
use ringlru::policy::ring_lru::RingLruCore;

// Fuzz arbitrary operation sequences on RingLruCore
//
// First byte picks the capacity; each following pair is (op, key).
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let mut cache: RingLruCore<u8, u32> = RingLruCore::new(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let key = data[idx + 1];
        let value = u32::from(key) * 3;

        match op {
            0 => {
                // add
                let was_resident = cache.contains(&key);
                let before = cache.len();
                let reported = cache.add(key, value);
                assert!(cache.contains(&key));
                assert_eq!(cache.peek(&key), Some(&value));
                if was_resident {
                    assert!(!reported);
                } else {
                    let evicted = cache.len() == before;
                    assert_eq!(reported, evicted || cache.len() == capacity);
                }
            }
            1 => {
                // get
                let before = cache.distance(&key);
                let found = cache.get(&key).is_some();
                assert_eq!(found, before.is_some());
                if let Some(d) = before {
                    assert_eq!(cache.distance(&key), Some(d / 2));
                }
            }
            2 => {
                // peek / contains parity
                assert_eq!(cache.peek(&key).is_some(), cache.contains(&key));
            }
            3 => {
                // remove
                let was_resident = cache.contains(&key);
                assert_eq!(cache.remove(&key), was_resident);
                assert!(!cache.contains(&key));
            }
            4 => {
                // contains_or_add
                let was_resident = cache.contains(&key);
                let (found, _) = cache.contains_or_add(key, value);
                assert_eq!(found, was_resident);
                assert!(cache.contains(&key));
            }
            5 => {
                // keys
                assert_eq!(cache.keys().len(), cache.len());
            }
            6 => {
                // purge (rare)
                if key == 0 {
                    cache.purge();
                    assert!(cache.is_empty());
                }
            }
            _ => unreachable!(),
        }

        assert!(cache.len() <= capacity);
        assert_eq!(cache.check_invariants(), Ok(()));
        idx += 2;
    }
});
