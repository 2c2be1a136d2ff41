use ringlru::policy::ring_lru::RingLruCore;

fn main() {
    env_logger::init();

    let mut cache: RingLruCore<u32, String> = RingLruCore::new(4);

    for (key, name) in [(1, "alpha"), (2, "beta"), (3, "gamma"), (4, "delta")] {
        cache.add(key, name.to_string());
    }
    println!("distance of 1 before get: {:?}", cache.distance(&1));

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value);
    }
    println!("distance of 1 after get: {:?}", cache.distance(&1));

    let evicted = cache.add(5, "epsilon".to_string());
    println!("add 5 evicted? {}", evicted);
    println!("contains 1? {}", cache.contains(&1));
    println!("contains 3? {}", cache.contains(&3));
}

// Expected output:
// distance of 1 before get: Some(3)
// hit 1: alpha
// distance of 1 after get: Some(1)
// add 5 evicted? true
// contains 1? true
// contains 3? false
//
// Explanation: capacity=4; key 1 is the oldest entry at distance 3. The get
// moves it halfway to the head (distance 1) by swapping with key 3, which now
// sits in the slot the next insert overwrites.
