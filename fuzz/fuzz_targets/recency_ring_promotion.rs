#![no_main]

use libfuzzer_sys::fuzz_target;
use ringlru::ds::RecencyRing;
use ringlru::ds::SlotArena;

// Fuzz promotion on a RecencyRing with holes
//
// Checks that promotion halves the distance, never loses a handle and keeps
// the occupied count consistent.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0]) + 1;
    let mut ring = RecencyRing::new(capacity);
    let mut arena = SlotArena::new();

    for n in 0..capacity {
        let pos = ring.advance_head();
        ring.occupy(pos, arena.insert(n));
    }

    for &byte in &data[1..] {
        let pos = usize::from(byte) % capacity;
        if byte & 0x80 != 0 {
            ring.vacate(pos);
            continue;
        }

        let occupied = ring.occupied();
        let moving = ring.get(pos);
        let distance = ring.distance(pos);
        match ring.promote(pos) {
            Some(step) => {
                assert_eq!(ring.distance(step.target), distance / 2);
                assert_eq!(ring.get(step.target), moving);
                assert_eq!(ring.get(pos), step.displaced);
            }
            None => assert_eq!(distance / 2, distance),
        }
        assert_eq!(ring.occupied(), occupied);
        ring.debug_validate_invariants();
    }
});
