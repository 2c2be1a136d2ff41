pub mod ring_lru;
