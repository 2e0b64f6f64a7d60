//! Eviction Policy Module
//!
//! Defines the shared contract for eviction policy metadata trackers and
//! the five concrete implementations: FIFO, LIFO, LRU, MRU, and LFU.

mod fifo;
mod lfu;
mod lifo;
mod lru;
mod mru;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use fifo::FifoState;
pub use lfu::LfuState;
pub use lifo::LifoState;
pub use lru::LruState;
pub use mru::MruState;

// == Policy State Trait ==
/// Auxiliary metadata tracker that decides which key to evict.
///
/// Each implementation maintains its own ordering and/or frequency data
/// alongside the key-value store. The cache facade keeps both in sync:
/// every key in the store has metadata here, and vice versa.
pub trait PolicyState: fmt::Debug + Send + Sync {
    /// Records a brand-new key entering the cache.
    fn record_insert(&mut self, key: &str);

    /// Records an access to an existing key (a successful get, or a put
    /// that overwrites). Whether this reorders anything is policy-specific;
    /// FIFO and LIFO ignore it entirely.
    fn record_access(&mut self, key: &str);

    /// Picks the key to evict. Only called when the cache is full and a
    /// new key is about to be inserted. Returns None only if no keys are
    /// tracked, which the facade never allows at eviction time.
    fn select_victim(&self) -> Option<String>;

    /// Purges all metadata for an evicted key.
    fn forget(&mut self, key: &str);

    /// Returns the number of tracked keys.
    fn len(&self) -> usize;

    /// Returns true if no keys are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == Policy Kind ==
/// Identifies one of the five supported eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First-in-first-out: evicts the oldest inserted key
    Fifo,
    /// Last-in-first-out: evicts the newest inserted key
    Lifo,
    /// Least-recently-used: evicts the key untouched the longest
    Lru,
    /// Most-recently-used: evicts the key touched most recently
    Mru,
    /// Least-frequently-used: evicts the key with the fewest accesses,
    /// breaking ties by least recent touch
    Lfu,
}

impl PolicyKind {
    /// Builds a fresh metadata tracker for this policy.
    pub fn build_state(&self) -> Box<dyn PolicyState> {
        match self {
            PolicyKind::Fifo => Box::new(FifoState::new()),
            PolicyKind::Lifo => Box::new(LifoState::new()),
            PolicyKind::Lru => Box::new(LruState::new()),
            PolicyKind::Mru => Box::new(MruState::new()),
            PolicyKind::Lfu => Box::new(LfuState::new()),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lifo" => Ok(PolicyKind::Lifo),
            "lru" => Ok(PolicyKind::Lru),
            "mru" => Ok(PolicyKind::Mru),
            "lfu" => Ok(PolicyKind::Lfu),
            other => Err(format!(
                "Unknown eviction policy '{}' (expected fifo, lifo, lru, mru, or lfu)",
                other
            )),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lifo => "lifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Mru => "mru",
            PolicyKind::Lfu => "lfu",
        };
        f.write_str(name)
    }
}
