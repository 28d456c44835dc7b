//! Key-value storage capability

use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Backend-agnostic key-value store.
///
/// Settings persistence and vendor response caching run through this trait.
/// Callers inject whichever backend fits the deployment: the in-memory store
/// for tests and single-process use, Upstash Redis REST for shared caches.
/// Values are strings; structured payloads serialize to JSON before storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key` with no expiry
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Store `value` under `key`, expiring after `ttl`
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Remove `key` if present
    async fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key in the store
    async fn clear(&self) -> Result<()>;
}
