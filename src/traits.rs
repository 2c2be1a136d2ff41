//! # Cache Contract
//!
//! [`ApproxLruCache`] is the operation set shared by the single-threaded
//! engine and the lock-wrapped variant, so callers can be written once and
//! handed either implementation.
//!
//! ## Architecture
//!
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │          ApproxLruCache<K, V>            │
//!                    │                                          │
//!                    │  add(&mut, K, V) → bool                  │
//!                    │  get(&mut, &K) → Option<V>               │
//!                    │  peek(&, &K) → Option<V>                 │
//!                    │  contains(&, &K) → bool                  │
//!                    │  contains_or_add(&mut, K, V) → (bool,bool)│
//!                    │  remove(&mut, &K) → bool                 │
//!                    │  keys(&) → Vec<K>                        │
//!                    │  len(&) / is_empty(&) / capacity(&)      │
//!                    │  purge(&mut)                             │
//!                    └─────────────────────┬────────────────────┘
//!                                          │
//!                 ┌────────────────────────┴─────────────────────────┐
//!                 ▼                                                  ▼
//!   ┌──────────────────────────────┐             ┌──────────────────────────────────┐
//!   │      RingLruCore<K, V>       │             │   ConcurrentRingLruCache<K, V>   │
//!   │  single-threaded engine      │◄────────────│   Arc<RwLock<RingLruCore>>       │
//!   └──────────────────────────────┘             │   + ConcurrentCache marker       │
//!                                                └──────────────────────────────────┘
//! ```
//!
//! ## Semantics
//!
//! | Method             | Promotes? | Notes                                          |
//! |--------------------|-----------|------------------------------------------------|
//! | `add`              | on update | `true` on eviction or once at capacity         |
//! | `get`              | yes       | Halves the entry's distance from the head      |
//! | `peek`             | no        |                                                |
//! | `contains`         | no        |                                                |
//! | `contains_or_add`  | no        | Resident keys are left exactly where they are  |
//! | `remove`           | -         | Leaves a hole in the ring                      |
//! | `keys`             | no        | Unordered                                      |
//! | `purge`            | -         | Bulk reset, no evictions reported              |
//!
//! Lookups hand back owned values (`V: Clone` on the implementations) because
//! the concurrent variant cannot lend a reference past its lock guard. Store
//! `Arc<T>` as the value type when clones are expensive.
//!
//! ## Example Usage
//!
//! ```
//! use ringlru::policy::ring_lru::RingLruCore;
//! use ringlru::traits::ApproxLruCache;
//!
//! fn warm<C: ApproxLruCache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
//!     for (key, value) in data {
//!         cache.add(*key, value.to_string());
//!     }
//! }
//!
//! let mut cache = RingLruCore::new(8);
//! warm(&mut cache, &[(1, "one"), (2, "two")]);
//! assert_eq!(ApproxLruCache::len(&cache), 2);
//! ```

/// Operation set shared by every cache variant in this crate.
///
/// # Type Parameters
///
/// - `K`: Key type (implementations require `Eq + Hash + Clone`)
/// - `V`: Value type (implementations require `Clone` for owned lookups)
pub trait ApproxLruCache<K, V> {
    /// Inserts or updates `key`.
    ///
    /// Updating a resident key promotes it and never reports an eviction.
    /// Inserting a new key returns `true` if a resident entry was evicted or
    /// the cache is now at capacity, `false` while it is still filling.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::RingLruCore;
    /// use ringlru::traits::ApproxLruCache;
    ///
    /// let mut cache = RingLruCore::new(2);
    /// assert!(!ApproxLruCache::add(&mut cache, 1, "a"));
    /// assert!(ApproxLruCache::add(&mut cache, 2, "b"));
    /// assert!(!ApproxLruCache::add(&mut cache, 2, "B")); // update, not eviction
    /// ```
    fn add(&mut self, key: K, value: V) -> bool;

    /// Looks up `key` and promotes it toward the head.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Looks up `key` without changing its position.
    fn peek(&self, key: &K) -> Option<V>;

    /// Returns `true` if `key` is resident. Does not promote.
    fn contains(&self, key: &K) -> bool;

    /// Adds `key` only if it is absent.
    ///
    /// Returns `(found, evicted)`. A resident key is reported as
    /// `(true, false)` and is not promoted; otherwise the result of
    /// [`add`](Self::add) is reported as `evicted`.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlru::policy::ring_lru::RingLruCore;
    /// use ringlru::traits::ApproxLruCache;
    ///
    /// let mut cache = RingLruCore::new(4);
    /// assert_eq!(ApproxLruCache::contains_or_add(&mut cache, 1, "a"), (false, false));
    /// assert_eq!(ApproxLruCache::contains_or_add(&mut cache, 1, "z"), (true, false));
    /// assert_eq!(ApproxLruCache::peek(&cache, &1), Some("a"));
    /// ```
    fn contains_or_add(&mut self, key: K, value: V) -> (bool, bool);

    /// Removes `key`, returning `true` if it was resident.
    fn remove(&mut self, key: &K) -> bool;

    /// Returns every resident key, in no particular order.
    fn keys(&self) -> Vec<K>;

    /// Number of resident keys.
    fn len(&self) -> usize;

    /// Returns `true` if no keys are resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fixed number of ring slots.
    fn capacity(&self) -> usize;

    /// Drops every entry and resets the ring.
    fn purge(&mut self);
}

/// Marker trait for cache handles that may be shared across threads.
///
/// # Example
///
/// ```
/// use ringlru::policy::ring_lru::ConcurrentRingLruCache;
/// use ringlru::traits::{ApproxLruCache, ConcurrentCache};
///
/// fn assert_shareable<C: ApproxLruCache<u64, u64> + ConcurrentCache>(_: &C) {}
///
/// let cache: ConcurrentRingLruCache<u64, u64> = ConcurrentRingLruCache::new(16);
/// assert_shareable(&cache);
/// ```
pub trait ConcurrentCache: Send + Sync {}
