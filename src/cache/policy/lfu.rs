//! LFU Policy Module
//!
//! Tracks access frequency for least-frequently-used eviction, with
//! recency as the tie-breaker among equally cold keys.

use std::collections::{HashMap, VecDeque};

use super::PolicyState;

// == LFU State ==
/// Frequency tracker for LFU eviction.
///
/// Two structures side by side:
/// - `freq`: key -> access count (1 on insert, +1 per access)
/// - `order`: recency deque, Front = Most recently touched, Back = Least
///
/// The victim is the key with the minimum frequency; when several keys
/// share the minimum, the least recently touched of them loses.
#[derive(Debug, Default)]
pub struct LfuState {
    /// Access count per key
    freq: HashMap<String, u64>,
    /// Keys ordered by last touch
    order: VecDeque<String>,
}

impl LfuState {
    /// Creates a new empty LFU tracker.
    pub fn new() -> Self {
        Self {
            freq: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Moves a key to the front (most recent), inserting it if absent.
    fn touch(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push_front(key.to_string());
    }

    /// Returns the access count for a key, if tracked.
    #[cfg(test)]
    pub fn frequency(&self, key: &str) -> Option<u64> {
        self.freq.get(key).copied()
    }
}

impl PolicyState for LfuState {
    fn record_insert(&mut self, key: &str) {
        self.freq.insert(key.to_string(), 1);
        self.touch(key);
    }

    fn record_access(&mut self, key: &str) {
        *self.freq.entry(key.to_string()).or_insert(0) += 1;
        self.touch(key);
    }

    fn select_victim(&self) -> Option<String> {
        let min_freq = self.freq.values().copied().min()?;
        // Scan from the least-recent end so ties fall to the coldest touch
        self.order
            .iter()
            .rev()
            .find(|k| self.freq.get(*k) == Some(&min_freq))
            .cloned()
    }

    fn forget(&mut self, key: &str) {
        self.freq.remove(key);
        self.order.retain(|k| k != key);
    }

    fn len(&self) -> usize {
        self.freq.len()
    }
}
