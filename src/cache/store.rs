//! Key-Value Store Module
//!
//! Plain key-value storage with no policy knowledge. Eviction order and
//! capacity enforcement live in the cache facade.

use std::collections::HashMap;

use serde_json::Value;

// == KV Store ==
/// Backing map from key to opaque JSON value.
///
/// Values are never interpreted; the key is the only identity. Insertion
/// order is irrelevant here since ordering is the policy tracker's job.
#[derive(Debug, Default)]
pub struct KvStore {
    /// Key-value storage
    entries: HashMap<String, Value>,
}

impl KvStore {
    // == Constructor ==
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Set ==
    /// Inserts or overwrites a key-value pair.
    ///
    /// Returns the previous value if the key was already present.
    pub fn set(&mut self, key: String, value: Value) -> Option<Value> {
        self.entries.insert(key, value)
    }

    // == Get ==
    /// Looks up a value by exact key match.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    // == Remove ==
    /// Removes an entry, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    // == Contains ==
    /// Checks whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
