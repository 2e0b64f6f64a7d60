//! Cache Module
//!
//! Provides a bounded in-memory cache with interchangeable eviction
//! policies: FIFO, LIFO, LRU, MRU, and LFU.

mod facade;
pub mod policy;
mod stats;
mod store;


// Re-export public types
pub use facade::PolicyCache;
pub use policy::{PolicyKind, PolicyState};
pub use stats::CacheStats;
pub use store::KvStore;

// == Public Constants ==
/// Default maximum number of entries
pub const DEFAULT_CAPACITY: usize = 4;
