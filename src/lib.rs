//! ringlru: a bounded key/value cache with approximate LRU eviction.
//!
//! Recency lives in a fixed slot ring; a hit moves an entry halfway toward
//! the head with one swap, and inserts overwrite the slot furthest from it.
//! See `DESIGN.md` for the layout and invariants.

pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
