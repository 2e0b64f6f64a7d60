//! MRU Policy Module
//!
//! Tracks access recency for most-recently-used eviction.

use std::collections::VecDeque;

use super::PolicyState;

// == MRU State ==
/// Recency tracker for MRU eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently touched (eviction victim)
/// - Back = Least recently touched
///
/// Same bookkeeping as LRU; only the victim end differs.
#[derive(Debug, Default)]
pub struct MruState {
    /// Keys ordered by last touch
    order: VecDeque<String>,
}

impl MruState {
    /// Creates a new empty MRU tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    /// Moves a key to the front (most recent), inserting it if absent.
    fn touch(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push_front(key.to_string());
    }
}

impl PolicyState for MruState {
    fn record_insert(&mut self, key: &str) {
        self.touch(key);
    }

    fn record_access(&mut self, key: &str) {
        self.touch(key);
    }

    fn select_victim(&self) -> Option<String> {
        self.order.front().cloned()
    }

    fn forget(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}
