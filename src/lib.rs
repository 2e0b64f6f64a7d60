//! Policy Cache - A lightweight in-memory cache server
//!
//! Provides a bounded key-value cache with interchangeable eviction
//! policies (FIFO, LIFO, LRU, MRU, LFU) behind a small HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{PolicyCache, PolicyKind};
pub use config::Config;
