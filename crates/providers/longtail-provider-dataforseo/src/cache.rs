//! Best-effort response caching
//!
//! Labs calls are billed per request, so identical request bodies within
//! the TTL window are answered from a `KeyValueStore` instead of the wire.
//! A broken store never fails a request; it only logs.

use longtail_core::storage::KeyValueStore;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default lifetime of a cached Labs response
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cache wrapper over a key-value store
#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
}

impl ResponseCache {
    /// Cache responses in `store` with the default 24-hour TTL
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Cache responses with a custom TTL
    pub fn with_ttl(store: Arc<dyn KeyValueStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Cache key for one endpoint + request body pair.
    ///
    /// The body is hashed so arbitrarily large requests map to a fixed-size
    /// key, and the endpoint tag keeps different calls with identical bodies
    /// apart.
    pub fn cache_key(endpoint: &str, body: &str) -> String {
        let digest = Sha256::digest(body.as_bytes());
        format!("dataforseo:{}:{}", endpoint, hex::encode(digest))
    }

    /// Look up a cached response body
    pub async fn lookup(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(Some(body)) => {
                debug!(key = %key, "Cache hit");
                Some(body)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(key = %key, "Cache lookup failed: {}", e);
                None
            }
        }
    }

    /// Store a response body, logging instead of failing on store errors
    pub async fn put(&self, key: &str, body: &str) {
        if let Err(e) = self.store.set_with_ttl(key, body, self.ttl).await {
            warn!(key = %key, "Cache write failed: {}", e);
        }
    }
}
