//! # Ring LRU: approximate recency over a fixed slot ring
//!
//! A bounded key → value cache that approximates LRU without a linked list.
//! Recency is encoded by *position* in a fixed-size ring; an access moves the
//! entry halfway toward the freshest slot with a single swap.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                     ConcurrentRingLruCache<K, V>                         │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │                 Arc<RwLock<RingLruCore<K, V>>>                     │ │
//!   │   └────────────────────────────────────────────────────────────────────┘ │
//!   │                                  │                                       │
//!   │                                  ▼                                       │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │                       RingLruCore<K, V>                            │ │
//!   │   │                                                                    │ │
//!   │   │   index: FxHashMap<K, SlotId>        entries: SlotArena<Entry>     │ │
//!   │   │   ┌─────────┬────────┐               ┌─────────────────────────┐   │ │
//!   │   │   │  key A  │ id 0 ──┼──────────────►│ Entry { A, value, slot }│   │ │
//!   │   │   │  key B  │ id 1 ──┼──────────────►│ Entry { B, value, slot }│   │ │
//!   │   │   └─────────┴────────┘               └────────────┬────────────┘   │ │
//!   │   │                                                   │ slot           │ │
//!   │   │   ring: RecencyRing                               ▼                │ │
//!   │   │   ┌──────┬──────┬──────┬──────┬──────┬──────┐                      │ │
//!   │   │   │ id 1 │  --  │ id 0 │ id 4 │ id 2 │ id 3 │   head ──► pos 0     │ │
//!   │   │   └──────┴──────┴──────┴──────┴──────┴──────┘                      │ │
//!   │   │   distance: 0      1      2      3      4      5                   │ │
//!   │   └────────────────────────────────────────────────────────────────────┘ │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every resident entry is reachable two ways: through the key index and
//! through the ring. The entry records its ring position, and the ring cell
//! at that position holds the entry's handle.
//!
//! ## Operations Flow
//!
//! ```text
//!   INSERT new key (capacity = 4, full)
//!   ═══════════════════════════════════════════════════════════════════════════
//!
//!     head ──► [D] [C] [B] [A]        distance 0..3, A is furthest
//!
//!   add(E):
//!     1. head moves back one slot (wrapping) → lands on A's slot
//!     2. A is evicted (index + arena)
//!     3. E is written at the new head
//!
//!     head ──► [E] [D] [C] [B]
//!
//!   ═══════════════════════════════════════════════════════════════════════════
//!
//!   ACCESS existing key
//!   ═══════════════════════════════════════════════════════════════════════════
//!
//!     head ──► [D] [C] [B] [A]
//!
//!   get(A):  distance 3 → target distance 3 / 2 = 1
//!     swap A with C, fix both recorded slots
//!
//!     head ──► [D] [A] [B] [C]        C is now the next victim
//!
//!   ═══════════════════════════════════════════════════════════════════════════
//!
//!   REMOVE
//!   ═══════════════════════════════════════════════════════════════════════════
//!
//!     remove(B): slot becomes a hole, nothing shifts
//!
//!     head ──► [D] [A] [ ] [C]
//! ```
//!
//! ## Key Components
//!
//! | Component                  | Description                                       |
//! |----------------------------|---------------------------------------------------|
//! | `RingLruCore<K, V>`        | Single-threaded engine: index + arena + ring      |
//! | `ConcurrentRingLruCache`   | Thread-safe wrapper with `parking_lot::RwLock`    |
//! | `RecencyRing`              | Slot positions and the halving promotion          |
//! | `SlotArena<Entry<K, V>>`   | Owns entries behind stable `SlotId` handles       |
//!
//! ## RingLruCore Methods
//!
//! | Method               | Complexity | Description                               |
//! |----------------------|------------|-------------------------------------------|
//! | `try_new(capacity)`  | O(n)       | Fallible constructor                      |
//! | `add(k, v)`          | O(1)*      | Insert or update, may evict               |
//! | `get(&k)`            | O(1)       | Lookup + promotion                        |
//! | `peek(&k)`           | O(1)       | Lookup without promotion                  |
//! | `contains(&k)`       | O(1)       | Existence check                           |
//! | `contains_or_add`    | O(1)*      | Add only if absent, no promotion if found |
//! | `remove(&k)`         | O(1)       | Leaves a hole                             |
//! | `distance(&k)`       | O(1)       | Ring distance from head                   |
//! | `keys()`             | O(n)       | Unordered                                 |
//! | `purge()`            | O(n)       | Reset to empty                            |
//!
//! ## ConcurrentRingLruCache Methods
//!
//! | Method               | Lock Type | Description                          |
//! |----------------------|-----------|--------------------------------------|
//! | `add(k, v)`          | Write     | Insert or update                     |
//! | `get(&k)`            | Write     | Promotes, so it needs exclusivity    |
//! | `get_with(&k, f)`    | Write     | Promote and borrow value in `f`      |
//! | `contains_or_add`    | Write     | Single critical section              |
//! | `remove(&k)`         | Write     | Leaves a hole                        |
//! | `purge()`            | Write     | Reset to empty                       |
//! | `peek(&k)`           | Read      | No promotion                         |
//! | `peek_with(&k, f)`   | Read      | Borrow value in `f`                  |
//! | `contains(&k)`       | Read      |                                      |
//! | `keys()`             | Read      |                                      |
//! | `len()`/`capacity()` | Read      |                                      |
//! | `distance(&k)`       | Read      |                                      |
//!
//! ## Trade-offs
//!
//! | Aspect      | Pros                                   | Cons                               |
//! |-------------|----------------------------------------|------------------------------------|
//! | Promotion   | One swap, no list relinking            | Order is approximate               |
//! | Memory      | Flat ring, no per-node allocation      | Keys stored twice (index + entry)  |
//! | Removal     | O(1), no compaction                    | Holes until the head passes over   |
//! | Concurrency | One coarse lock, trivially correct     | Hits serialize on the write lock   |
//!
//! An entry that is read repeatedly reaches the head after
//! `bit_length(distance)` hits: 100 → 50 → 25 → 12 → 6 → 3 → 1 → 0.
//!
//! ## Thread Safety
//!
//! - `RingLruCore`: **NOT thread-safe**, callers must not share it unsynchronized
//! - `ConcurrentRingLruCache`: **Thread-safe** via `parking_lot::RwLock`

use std::fmt;
use std::hash::Hash;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

use log::{debug, trace, warn};
#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::ds::{RecencyRing, SlotArena, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::RingLruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::RingLruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsSnapshotProvider, RingLruMetricsReadRecorder,
    RingLruMetricsRecorder,
};
use crate::traits::ApproxLruCache;
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;

/// Capacity used by the `Default` impls.
pub const DEFAULT_CAPACITY: usize = 16;

/// One resident key/value pair and its current ring position.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    slot: usize,
}

/// Single-threaded ring cache engine.
///
/// # Example
///
/// ```
/// use ringlru::policy::ring_lru::RingLruCore;
///
/// let mut cache = RingLruCore::new(2);
/// assert!(!cache.add(1, "a")); // still filling
/// assert!(cache.add(2, "b"));  // at capacity
/// assert!(cache.add(3, "c"));  // evicts key 1
///
/// assert!(!cache.contains(&1));
/// assert_eq!(cache.peek(&2), Some(&"b"));
/// assert_eq!(cache.len(), 2);
/// ```
pub struct RingLruCore<K, V> {
    index: FxHashMap<K, SlotId>,
    entries: SlotArena<Entry<K, V>>,
    ring: RecencyRing,
    #[cfg(feature = "metrics")]
    metrics: RingLruMetrics,
}

impl<K, V> RingLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache with `capacity` ring slots.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::RingLruCore;
    ///
    /// let cache = RingLruCore::<u64, String>::try_new(128).unwrap();
    /// assert_eq!(cache.capacity(), 128);
    /// assert!(RingLruCore::<u64, String>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            warn!("rejecting ring cache configuration: capacity 0");
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        debug!("creating ring cache with capacity {}", capacity);
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            entries: SlotArena::with_capacity(capacity),
            ring: RecencyRing::new(capacity),
            #[cfg(feature = "metrics")]
            metrics: RingLruMetrics::default(),
        })
    }

    /// Creates a cache with `capacity` ring slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Number of resident keys. Holes in the ring do not count.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Fixed number of ring slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns `true` if `key` is resident. Does not promote.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_contains_call();

        self.index.contains_key(key)
    }

    /// Looks up `key` without promoting it.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::RingLruCore;
    ///
    /// let mut cache = RingLruCore::new(3);
    /// cache.add(1, "one");
    /// cache.add(2, "two");
    /// cache.add(3, "three");
    ///
    /// assert_eq!(cache.peek(&1), Some(&"one"));
    /// // Peeking did not protect key 1: it is still the next victim.
    /// cache.add(4, "four");
    /// assert!(!cache.contains(&1));
    /// ```
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let id = *self.index.get(key)?;
        let entry = self.entries.get(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_hit();

        Some(&entry.value)
    }

    /// Looks up `key` and moves it halfway toward the head.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::RingLruCore;
    ///
    /// let mut cache = RingLruCore::new(3);
    /// cache.add(1, "one");
    /// cache.add(2, "two");
    /// cache.add(3, "three");
    ///
    /// assert_eq!(cache.get(&1), Some(&"one"));
    /// // Key 1 swapped places with key 2, which is now the next victim.
    /// cache.add(4, "four");
    /// assert!(cache.contains(&1));
    /// assert!(!cache.contains(&2));
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = self.lookup_and_promote(key)?;
        self.entries.get(id).map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get) but hands out a mutable reference.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.lookup_and_promote(key)?;
        self.entries.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Inserts or updates `key`.
    ///
    /// An update promotes the entry, overwrites its value and returns
    /// `false`. A new key is written at the slot behind the head; whatever
    /// lived there is evicted. Returns `true` if an entry was evicted or the
    /// cache holds `capacity` entries afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::RingLruCore;
    ///
    /// let mut cache = RingLruCore::new(128);
    /// for key in 0..256u32 {
    ///     cache.add(key, key * 2);
    /// }
    /// assert_eq!(cache.len(), 128);
    /// assert!(!cache.contains(&0));
    /// assert!(cache.contains(&255));
    /// ```
    pub fn add(&mut self, key: K, value: V) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            self.promote(id);
            if let Some(entry) = self.entries.get_mut(id) {
                entry.value = value;
            }
            return false;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        let slot = self.ring.advance_head();
        let evicted = self.evict_at(slot);

        let id = self.entries.insert(Entry {
            key: key.clone(),
            value,
            slot,
        });
        self.ring.occupy(slot, id);
        self.index.insert(key, id);

        evicted || self.index.len() == self.capacity()
    }

    /// Adds `key` only if it is absent; a resident key is not promoted.
    ///
    /// Returns `(found, evicted)`.
    pub fn contains_or_add(&mut self, key: K, value: V) -> (bool, bool) {
        if self.contains(&key) {
            return (true, false);
        }
        (false, self.add(key, value))
    }

    /// Removes `key`, leaving a hole at its ring position.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::RingLruCore;
    ///
    /// let mut cache = RingLruCore::new(4);
    /// cache.add("a", 1);
    /// cache.add("b", 2);
    ///
    /// assert!(cache.remove(&"a"));
    /// assert!(!cache.remove(&"a"));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let Some(id) = self.index.remove(key) else {
            return false;
        };
        if let Some(entry) = self.entries.remove(id) {
            self.ring.vacate(entry.slot);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        true
    }

    /// Returns every resident key, in no particular order.
    pub fn keys(&self) -> Vec<K> {
        self.index.keys().cloned().collect()
    }

    /// Iterates resident `(key, value)` pairs without promoting them.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(_, entry)| (&entry.key, &entry.value))
    }

    /// Drops every entry and resets the head to slot 0.
    pub fn purge(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        debug!(
            "purging ring cache: {} entries, capacity {}",
            self.index.len(),
            self.capacity()
        );
        self.index.clear();
        self.entries.clear();
        self.ring.reset();
    }

    /// Ring distance of `key` from the head (0 = freshest). Does not promote.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::RingLruCore;
    ///
    /// let mut cache = RingLruCore::new(8);
    /// for key in 0..8 {
    ///     cache.add(key, ());
    /// }
    /// assert_eq!(cache.distance(&7), Some(0));
    /// assert_eq!(cache.distance(&0), Some(7));
    ///
    /// cache.get(&0);
    /// assert_eq!(cache.distance(&0), Some(3));
    /// ```
    pub fn distance(&self, key: &K) -> Option<usize> {
        let id = *self.index.get(key)?;
        self.entries
            .get(id)
            .map(|entry| self.ring.distance(entry.slot))
    }

    /// Checks that the key index, entry arena and ring agree.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first mismatch found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let capacity = self.capacity();
        if self.index.len() != self.entries.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but arena holds {} entries",
                self.index.len(),
                self.entries.len()
            )));
        }
        if self.entries.len() > capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.entries.len(),
                capacity
            )));
        }
        if self.ring.occupied() != self.entries.len() {
            return Err(InvariantError::new(format!(
                "ring has {} occupied slots for {} entries",
                self.ring.occupied(),
                self.entries.len()
            )));
        }
        if self.ring.head() >= capacity {
            return Err(InvariantError::new(format!(
                "head {} out of bounds for capacity {}",
                self.ring.head(),
                capacity
            )));
        }

        for (key, &id) in &self.index {
            let entry = self.entries.get(id).ok_or_else(|| {
                InvariantError::new(format!("index refers to free arena slot {}", id.index()))
            })?;
            if &entry.key != key {
                return Err(InvariantError::new(format!(
                    "arena slot {} holds a different key than the index",
                    id.index()
                )));
            }
            if self.ring.get(entry.slot) != Some(id) {
                return Err(InvariantError::new(format!(
                    "entry in arena slot {} records ring slot {} which holds {:?}",
                    id.index(),
                    entry.slot,
                    self.ring.get(entry.slot).map(SlotId::index)
                )));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("ring cache invariant violated: {}", err);
        }
        self.ring.debug_validate_invariants();
    }

    fn lookup_and_promote(&mut self, key: &K) -> Option<SlotId> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.promote(id);
        Some(id)
    }

    /// Halves the entry's distance from the head with one swap.
    fn promote(&mut self, id: SlotId) {
        #[cfg(feature = "metrics")]
        self.metrics.record_promotion_call();

        let Some(current) = self.entries.get(id).map(|entry| entry.slot) else {
            return;
        };
        let Some(step) = self.ring.promote(current) else {
            return;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_promotion_move();

        if let Some(displaced) = step.displaced
            && let Some(entry) = self.entries.get_mut(displaced)
        {
            #[cfg(feature = "metrics")]
            self.metrics.record_promotion_swap();

            entry.slot = current;
        }
        if let Some(entry) = self.entries.get_mut(id) {
            entry.slot = step.target;
        }
    }

    /// Evicts whatever occupies `slot`. Returns `true` if a live entry went.
    fn evict_at(&mut self, slot: usize) -> bool {
        let Some(victim) = self.ring.vacate(slot) else {
            return false;
        };
        let Some(entry) = self.entries.remove(victim) else {
            return false;
        };
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();

        trace!("evicted entry from ring slot {}", slot);
        true
    }
}

#[cfg(feature = "metrics")]
impl<K, V> RingLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> RingLruMetricsSnapshot {
        RingLruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evicted_entries: self.metrics.evicted_entries,
            promotion_calls: self.metrics.promotion_calls,
            promotion_moves: self.metrics.promotion_moves,
            promotion_swaps: self.metrics.promotion_swaps,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            clears: self.metrics.clears,
            peek_calls: self.metrics.peek_calls.get(),
            peek_hits: self.metrics.peek_hits.get(),
            contains_calls: self.metrics.contains_calls.get(),
            cache_len: self.index.len(),
            capacity: self.capacity(),
            ring_holes: self.ring.vacant(),
        }
    }

    /// Zeroes every counter; cache contents are untouched.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<RingLruMetricsSnapshot> for RingLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> RingLruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> fmt::Debug for RingLruCore<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingLruCore")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("head", &self.ring.head())
            .field("entries", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<K, V> Default for RingLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache with [`DEFAULT_CAPACITY`] slots.
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<K, V> Extend<(K, V)> for RingLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V> ApproxLruCache<K, V> for RingLruCore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn add(&mut self, key: K, value: V) -> bool {
        RingLruCore::add(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<V> {
        RingLruCore::get(self, key).cloned()
    }

    fn peek(&self, key: &K) -> Option<V> {
        RingLruCore::peek(self, key).cloned()
    }

    fn contains(&self, key: &K) -> bool {
        RingLruCore::contains(self, key)
    }

    fn contains_or_add(&mut self, key: K, value: V) -> (bool, bool) {
        RingLruCore::contains_or_add(self, key, value)
    }

    fn remove(&mut self, key: &K) -> bool {
        RingLruCore::remove(self, key)
    }

    fn keys(&self) -> Vec<K> {
        RingLruCore::keys(self)
    }

    fn len(&self) -> usize {
        RingLruCore::len(self)
    }

    fn capacity(&self) -> usize {
        RingLruCore::capacity(self)
    }

    fn purge(&mut self) {
        RingLruCore::purge(self)
    }
}

/// Thread-safe ring cache: one engine behind one reader/writer lock.
///
/// Cloning the handle shares the same cache.
#[cfg(feature = "concurrency")]
pub struct ConcurrentRingLruCache<K, V> {
    inner: Arc<RwLock<RingLruCore<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentRingLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentRingLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentRingLruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> Default for ConcurrentRingLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Creates a concurrent cache with [`DEFAULT_CAPACITY`] slots.
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentRingLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Creates a thread-safe cache with `capacity` ring slots.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::ConcurrentRingLruCache;
    ///
    /// let cache = ConcurrentRingLruCache::<u32, String>::try_new(64).unwrap();
    /// assert_eq!(cache.capacity(), 64);
    /// assert!(ConcurrentRingLruCache::<u32, String>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_core(RingLruCore::try_new(capacity)?))
    }

    /// Creates a thread-safe cache with `capacity` ring slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        Self::from_core(RingLruCore::new(capacity))
    }

    /// Wraps an existing engine, keeping its contents and ring positions.
    pub fn from_core(core: RingLruCore<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(core)),
        }
    }

    /// Inserts or updates `key` under the write lock.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::ConcurrentRingLruCache;
    ///
    /// let cache = ConcurrentRingLruCache::new(2);
    /// assert!(!cache.add(1, "a".to_string()));
    /// assert!(cache.add(2, "b".to_string()));
    /// assert!(!cache.add(2, "B".to_string()));
    /// ```
    pub fn add(&self, key: K, value: V) -> bool {
        let mut cache = self.inner.write();
        cache.add(key, value)
    }

    /// Looks up and promotes `key`, returning a clone of its value.
    ///
    /// Takes the write lock because promotion reorders the ring.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut cache = self.inner.write();
        cache.get(key).cloned()
    }

    /// Looks up and promotes `key`, passing a borrow of its value to `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::ConcurrentRingLruCache;
    ///
    /// let cache = ConcurrentRingLruCache::new(4);
    /// cache.add(1, vec![1u8, 2, 3]);
    /// assert_eq!(cache.get_with(&1, |bytes| bytes.len()), Some(3));
    /// assert_eq!(cache.get_with(&9, |bytes| bytes.len()), None);
    /// ```
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let mut cache = self.inner.write();
        cache.get(key).map(f)
    }

    /// Looks up `key` under the read lock without promoting it.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let cache = self.inner.read();
        cache.peek(key).cloned()
    }

    /// Borrows `key`'s value in `f` under the read lock, without promoting.
    pub fn peek_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let cache = self.inner.read();
        cache.peek(key).map(f)
    }

    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.read();
        cache.contains(key)
    }

    /// Adds `key` if absent, as one critical section. Returns `(found, evicted)`.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::ConcurrentRingLruCache;
    ///
    /// let cache = ConcurrentRingLruCache::new(4);
    /// assert_eq!(cache.contains_or_add(7, "seven"), (false, false));
    /// assert_eq!(cache.contains_or_add(7, "other"), (true, false));
    /// assert_eq!(cache.peek(&7), Some("seven"));
    /// ```
    pub fn contains_or_add(&self, key: K, value: V) -> (bool, bool) {
        let mut cache = self.inner.write();
        cache.contains_or_add(key, value)
    }

    pub fn remove(&self, key: &K) -> bool {
        let mut cache = self.inner.write();
        cache.remove(key)
    }

    pub fn keys(&self) -> Vec<K> {
        let cache = self.inner.read();
        cache.keys()
    }

    pub fn len(&self) -> usize {
        let cache = self.inner.read();
        cache.len()
    }

    pub fn is_empty(&self) -> bool {
        let cache = self.inner.read();
        cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        let cache = self.inner.read();
        cache.capacity()
    }

    pub fn distance(&self, key: &K) -> Option<usize> {
        let cache = self.inner.read();
        cache.distance(key)
    }

    pub fn purge(&self) {
        let mut cache = self.inner.write();
        cache.purge()
    }

    /// Runs [`RingLruCore::check_invariants`] under the read lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let cache = self.inner.read();
        cache.check_invariants()
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> ConcurrentRingLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    pub fn metrics_snapshot(&self) -> RingLruMetricsSnapshot {
        let cache = self.inner.read();
        cache.metrics_snapshot()
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> MetricsSnapshotProvider<RingLruMetricsSnapshot> for ConcurrentRingLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    fn snapshot(&self) -> RingLruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// Inherent methods are called by path: a bare method call on `self` here
// resolves back into this impl.
#[cfg(feature = "concurrency")]
impl<K, V> ApproxLruCache<K, V> for ConcurrentRingLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn add(&mut self, key: K, value: V) -> bool {
        ConcurrentRingLruCache::add(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<V> {
        ConcurrentRingLruCache::get(self, key)
    }

    fn peek(&self, key: &K) -> Option<V> {
        ConcurrentRingLruCache::peek(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        ConcurrentRingLruCache::contains(self, key)
    }

    fn contains_or_add(&mut self, key: K, value: V) -> (bool, bool) {
        ConcurrentRingLruCache::contains_or_add(self, key, value)
    }

    fn remove(&mut self, key: &K) -> bool {
        ConcurrentRingLruCache::remove(self, key)
    }

    fn keys(&self) -> Vec<K> {
        ConcurrentRingLruCache::keys(self)
    }

    fn len(&self) -> usize {
        ConcurrentRingLruCache::len(self)
    }

    fn capacity(&self) -> usize {
        ConcurrentRingLruCache::capacity(self)
    }

    fn purge(&mut self) {
        ConcurrentRingLruCache::purge(self)
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentRingLruCache<K, V>
where
    K: Send + Sync,
    V: Send + Sync,
{
}
