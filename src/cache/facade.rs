//! Cache Facade Module
//!
//! Main cache engine combining the key-value store with a policy tracker
//! and enforcing the capacity bound.

use serde_json::Value;
use tracing::{debug, info};

use crate::cache::policy::{PolicyKind, PolicyState};
use crate::cache::{CacheStats, KvStore};

// == Policy Cache ==
/// Bounded key-value cache with a pluggable eviction policy.
///
/// Composes the store and the policy tracker behind a uniform put/get
/// contract. The policy is fixed at construction; there is no runtime
/// switching and no delete operation. Entries leave the cache only by
/// eviction.
///
/// Invalid input (empty key, null value) is absorbed as a silent no-op
/// rather than an error.
#[derive(Debug)]
pub struct PolicyCache {
    /// Key-value storage
    store: KvStore,
    /// Policy-specific order/frequency metadata
    policy: Box<dyn PolicyState>,
    /// Which policy is installed
    kind: PolicyKind,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Performance statistics
    stats: CacheStats,
}

impl PolicyCache {
    // == Constructor ==
    /// Creates a new cache with the given policy and capacity.
    ///
    /// Capacity must be positive; zero is clamped to one so that an
    /// insert never has to evict the key it is inserting.
    ///
    /// # Arguments
    /// * `kind` - The eviction policy to install
    /// * `capacity` - Maximum number of entries the cache can hold
    pub fn new(kind: PolicyKind, capacity: usize) -> Self {
        Self {
            store: KvStore::new(),
            policy: kind.build_state(),
            kind,
            capacity: capacity.max(1),
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Stores a key-value pair, evicting per policy if the cache is full.
    ///
    /// An empty key or null value makes the call a no-op. Overwriting an
    /// existing key replaces the value and counts as an access (which
    /// FIFO and LIFO ignore); it can never trigger an eviction.
    ///
    /// Returns the evicted key when the insert displaced an entry. The
    /// same discard is also logged as `DISCARD: <key>` and counted in
    /// the statistics, exactly once per eviction.
    pub fn put(&mut self, key: &str, value: Value) -> Option<String> {
        if key.is_empty() || value.is_null() {
            debug!("Ignoring put with empty key or null value");
            return None;
        }

        // Overwrite case: value replaced, position updated per policy
        if self.store.contains(key) {
            self.store.set(key.to_string(), value);
            self.policy.record_access(key);
            return None;
        }

        // New key at capacity: make room first
        let mut evicted = None;
        if self.store.len() >= self.capacity {
            if let Some(victim) = self.policy.select_victim() {
                self.store.remove(&victim);
                self.policy.forget(&victim);
                self.stats.record_eviction();
                info!("DISCARD: {}", victim);
                evicted = Some(victim);
            }
        }

        self.store.set(key.to_string(), value);
        self.policy.record_insert(key);
        self.stats.set_total_entries(self.store.len());

        evicted
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit counts as an access for recency/frequency policies. A miss
    /// (absent or empty key) returns None and touches no policy metadata.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        match self.store.get(key) {
            Some(value) => {
                let value = value.clone();
                self.stats.record_hit();
                self.policy.record_access(key);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Accessors ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the installed eviction policy.
    pub fn policy(&self) -> PolicyKind {
        self.kind
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.store.len());
        stats
    }
}
