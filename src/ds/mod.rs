pub mod recency_ring;
pub mod slot_arena;

pub use recency_ring::{Promotion, RecencyRing};
pub use slot_arena::{SlotArena, SlotId};
