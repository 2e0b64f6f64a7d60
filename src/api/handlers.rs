//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::PolicyCache;
use crate::error::{CacheError, Result};
use crate::models::{
    ConfigResponse, GetResponse, HealthResponse, SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The cache is wrapped in Arc<RwLock<>> so every request serializes on
/// one exclusive lock per cache instance. Even reads take the write lock:
/// a GET updates recency/frequency metadata, and victim selection reads
/// global metadata, so per-key locking would not be sound.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache
    pub cache: Arc<RwLock<PolicyCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: PolicyCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let cache = PolicyCache::new(config.policy, config.capacity);
        Self::new(cache)
    }
}

/// Handler for PUT /set
///
/// Stores a key-value pair in the cache. An empty key is rejected at the
/// HTTP boundary; a null value is absorbed by the cache as a no-op and
/// reported as ignored. When the insert evicts an entry, the response
/// carries the discarded key.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let is_noop = req.value.is_null();

    // Acquire write lock and store the value
    let mut cache = state.cache.write().await;
    let evicted = cache.put(&req.key, req.value);

    if is_noop {
        return Ok(Json(SetResponse::ignored(req.key)));
    }
    Ok(Json(SetResponse::new(req.key, evicted)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key. An absent key maps to 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    // Write lock: a hit updates policy metadata and stats
    let mut cache = state.cache.write().await;
    match cache.get(&key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock is enough for stats
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
    ))
}

/// Handler for GET /config
///
/// Returns the active eviction policy and capacity.
pub async fn config_handler(State(state): State<AppState>) -> Json<ConfigResponse> {
    let cache = state.cache.read().await;
    Json(ConfigResponse::new(cache.policy(), cache.capacity()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
