//! Fixed-size slot ring that encodes approximate recency by position.
//!
//! The ring never moves entries itself; it stores [`SlotId`] handles and a
//! head cursor. New entries are written one step *behind* the current head
//! (the cursor walks downward, wrapping), so the distance of a position from
//! the head is its approximate age: 0 is the freshest slot and
//! `capacity - 1` is the slot the next insert will overwrite.
//!
//! ## Architecture
//!
//! ```text
//!   capacity = 8, head = 5
//!
//!   position:   0    1    2    3    4    5    6    7
//!             ┌────┬────┬────┬────┬────┬────┬────┬────┐
//!   slots:    │ id │ id │ -- │ id │ id │ id │ id │ id │
//!             └────┴────┴────┴────┴────┴────┴────┴────┘
//!                                        ▲
//!                                       head
//!   distance:   3    4    5    6    7    0    1    2
//!
//!   next insert → head = 4 (distance 7 slot is reused, its occupant evicted)
//! ```
//!
//! ## Promotion
//!
//! ```text
//!   promote(pos):
//!     d      = (pos - head) mod capacity
//!     target = (head + d / 2) mod capacity
//!     swap(slots[pos], slots[target])
//!
//!   d: 100 → 50 → 25 → 12 → 6 → 3 → 1 → 0
//! ```
//!
//! Whatever occupied `target` (an entry or a hole) ends up at `pos`, so
//! promotion never destroys anything. The caller owns the entries and is
//! told which handle was displaced so it can update its back-reference.
//!
//! ## Performance Characteristics
//!
//! | Operation       | Time | Notes                                  |
//! |-----------------|------|----------------------------------------|
//! | `advance_head`  | O(1) | Wrapping decrement                     |
//! | `occupy`        | O(1) | Returns any previous occupant          |
//! | `vacate`        | O(1) | Leaves a hole                          |
//! | `promote`       | O(1) | One swap                               |
//! | `reset`         | O(n) | Clears every slot                      |

use crate::ds::slot_arena::SlotId;

/// Result of a promotion that actually moved something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promotion {
    /// Position the promoted handle now occupies.
    pub target: usize,
    /// Handle that sat at `target` before the swap and now sits at the
    /// promoted handle's old position. `None` when `target` was a hole.
    pub displaced: Option<SlotId>,
}

/// Circular array of entry handles with a downward-walking head cursor.
#[derive(Debug)]
pub struct RecencyRing {
    slots: Vec<Option<SlotId>>,
    head: usize,
    occupied: usize,
}

impl RecencyRing {
    /// Creates an empty ring with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Callers validate capacity up front and
    /// surface a [`ConfigError`](crate::error::ConfigError) instead.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "recency ring capacity must be non-zero");
        Self {
            slots: vec![None; capacity],
            head: 0,
            occupied: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Current head position (where the most recent insert was written).
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Number of slots holding a handle.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Number of empty slots, including never-filled ones.
    #[inline]
    pub fn vacant(&self) -> usize {
        self.capacity() - self.occupied
    }

    /// Handle stored at `pos`, if any.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<SlotId> {
        self.slots.get(pos).copied().flatten()
    }

    /// Moves the head one slot back (wrapping) and returns the new head.
    ///
    /// The slot at the new head is the one furthest from the old head; any
    /// handle still stored there is the caller's eviction victim.
    #[inline]
    pub fn advance_head(&mut self) -> usize {
        self.head = self.wrap_back(self.head);
        self.head
    }

    /// Stores `id` at `pos`, returning the handle it replaced.
    pub fn occupy(&mut self, pos: usize, id: SlotId) -> Option<SlotId> {
        let previous = self.slots[pos].replace(id);
        if previous.is_none() {
            self.occupied += 1;
        }
        previous
    }

    /// Empties `pos`, leaving a hole. Returns the handle that was there.
    pub fn vacate(&mut self, pos: usize) -> Option<SlotId> {
        let previous = self.slots.get_mut(pos)?.take();
        if previous.is_some() {
            self.occupied -= 1;
        }
        previous
    }

    /// Distance of `pos` from the head, walking away from the freshest slot.
    #[inline]
    pub fn distance(&self, pos: usize) -> usize {
        let cap = self.capacity();
        (pos + cap - self.head) % cap
    }

    /// Position halfway (rounded toward the head) between `pos` and the head.
    #[inline]
    pub fn promotion_target(&self, pos: usize) -> usize {
        (self.head + self.distance(pos) / 2) % self.capacity()
    }

    /// Swaps the contents of `pos` with its promotion target.
    ///
    /// Returns `None` when `pos` is already at the head and nothing moves.
    pub fn promote(&mut self, pos: usize) -> Option<Promotion> {
        let target = self.promotion_target(pos);
        if target == pos {
            return None;
        }
        let displaced = self.slots[target];
        self.slots.swap(pos, target);
        Some(Promotion { target, displaced })
    }

    /// Empties every slot and moves the head back to position 0.
    pub fn reset(&mut self) {
        self.slots.fill(None);
        self.head = 0;
        self.occupied = 0;
    }

    /// Iterates occupied positions in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, SlotId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| slot.map(|id| (pos, id)))
    }

    #[inline]
    fn wrap_back(&self, pos: usize) -> usize {
        if pos == 0 { self.capacity() - 1 } else { pos - 1 }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.head < self.capacity());
        assert_eq!(
            self.occupied,
            self.slots.iter().filter(|slot| slot.is_some()).count()
        );
    }
}
