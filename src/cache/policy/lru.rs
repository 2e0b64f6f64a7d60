//! LRU Policy Module
//!
//! Tracks access recency for least-recently-used eviction.

use std::collections::VecDeque;

use super::PolicyState;

// == LRU State ==
/// Recency tracker for LRU eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently touched
/// - Back = Least recently touched (eviction victim)
///
/// Both inserts and accesses move a key to the front.
#[derive(Debug, Default)]
pub struct LruState {
    /// Keys ordered by last touch
    order: VecDeque<String>,
}

impl LruState {
    /// Creates a new empty LRU tracker.
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

impl PolicyState for LruState {
    fn record_insert(&mut self, key: &str) {
        self.touch(key);
    }

    fn record_access(&mut self, key: &str) {
        self.touch(key);
    }

    fn select_victim(&self) -> Option<String> {
        self.order.back().cloned()
    }

    fn forget(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_new() {
        let lru = LruState::new();
        assert!(lru.is_empty());
        assert_eq!(lru.select_victim(), None);
    }

    #[test]
    fn test_lru_victim_is_least_recent() {
        let mut lru = LruState::new();

        lru.record_insert("key1");
        lru.record_insert("key2");
        lru.record_insert("key3");

        // key1 is oldest touch
        assert_eq!(lru.select_victim(), Some("key1".to_string()));
    }

    #[test]
    fn test_lru_access_moves_to_front() {
        let mut lru = LruState::new();

        lru.record_insert("key1");
        lru.record_insert("key2");
        lru.record_insert("key3");

        // Touch key1 again: key2 becomes the victim
        lru.record_access("key1");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.select_victim(), Some("key2".to_string()));
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = LruState::new();

        lru.record_insert("a");
        lru.record_insert("b");
        lru.record_insert("c");

        // Re-touch in a different order: a, then c, then b.
        // Recency front-to-back is now [b, c, a], so victims come out
        // a, then c, then b.
        lru.record_access("a");
        lru.record_access("c");
        lru.record_access("b");

        for expected in ["a", "c", "b"] {
            let victim = lru.select_victim().unwrap();
            assert_eq!(victim, expected);
            lru.forget(&victim);
        }
    }

    #[test]
    fn test_lru_forget() {
        let mut lru = LruState::new();

        lru.record_insert("key1");
        lru.record_insert("key2");

        lru.forget("key1");

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.select_victim(), Some("key2".to_string()));
    }

    #[test]
    fn test_lru_repeated_touch_keeps_single_entry() {
        let mut lru = LruState::new();

        lru.record_insert("key1");
        lru.record_access("key1");
        lru.record_access("key1");

        assert_eq!(lru.len(), 1);
    }
}
