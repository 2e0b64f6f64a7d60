//! LIFO Policy Module
//!
//! Tracks insertion order for last-in-first-out eviction.

use std::collections::VecDeque;

use super::PolicyState;

// == LIFO State ==
/// Insertion-order tracker for LIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest inserted
/// - Back = Newest inserted (eviction victim)
///
/// The victim is the newest key present at the moment of overflow: the
/// most recent resident is sacrificed to make room for an even newer one.
/// Accesses never reorder anything, and overwriting an existing key does
/// not reset its position.
#[derive(Debug, Default)]
pub struct LifoState {
    /// Keys in insertion order
    order: VecDeque<String>,
}

impl LifoState {
    /// Creates a new empty LIFO tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl PolicyState for LifoState {
    fn record_insert(&mut self, key: &str) {
        self.order.push_back(key.to_string());
    }

    fn record_access(&mut self, _key: &str) {
        // Insertion order only; accesses are irrelevant.
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
