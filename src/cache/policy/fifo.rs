//! FIFO Policy Module
//!
//! Tracks insertion order for first-in-first-out eviction.

use std::collections::VecDeque;

use super::PolicyState;

// == FIFO State ==
/// Insertion-order tracker for FIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest inserted (eviction victim)
/// - Back = Newest inserted
///
/// Accesses never reorder anything, and overwriting an existing key does
/// not reset its position.
#[derive(Debug, Default)]
pub struct FifoState {
    /// Keys in insertion order
    order: VecDeque<String>,
}

impl FifoState {
    /// Creates a new empty FIFO tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl PolicyState for FifoState {
    fn record_insert(&mut self, key: &str) {
        self.order.push_back(key.to_string());
    }

    fn record_access(&mut self, _key: &str) {
        // Insertion order only; accesses are irrelevant.
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
