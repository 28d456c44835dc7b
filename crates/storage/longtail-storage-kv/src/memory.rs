//! In-memory key-value store
//!
//! Process-local store used in tests and in single-node setups where
//! settings do not need to survive a restart. TTLs are honored with lazy
//! expiry: a key past its deadline reads as absent and is dropped on access.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use longtail_core::{KeyValueStore, Result};
use std::collections::HashMap;
use std::sync::RwLock;

struct StoredValue {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl StoredValue {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(deadline) if deadline <= now)
    }
}

/// In-memory `KeyValueStore` backed by a `HashMap`
#[derive(Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, StoredValue>>,
}

impl MemoryKvStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries, not counting keys past their deadline
    pub fn len(&self) -> usize {
        let now = Utc::now();
        self.entries
            .read()
            .unwrap()
            .values()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    /// True when the store holds no live entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Utc::now();
        {
            let entries = self.entries.read().unwrap();
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Expired: drop the key so the map does not accumulate dead entries
        self.entries.write().unwrap().remove(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().unwrap().insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(())
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: std::time::Duration) -> Result<()> {
        // A TTL too large for the calendar degrades to "never expires"
        let expires_at = Duration::from_std(ttl)
            .ok()
            .and_then(|delta| Utc::now().checked_add_signed(delta));

        self.entries.write().unwrap().insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.write().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryKvStore::new();
        store.set("color", "green").await.unwrap();

        assert_eq!(store.get("color").await.unwrap(), Some("green".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value() {
        let store = MemoryKvStore::new();
        store.set("color", "green").await.unwrap();
        store.set("color", "blue").await.unwrap();

        assert_eq!(store.get("color").await.unwrap(), Some("blue".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_expires_immediately() {
        let store = MemoryKvStore::new();
        store
            .set_with_ttl("flash", "gone", std::time::Duration::from_secs(0))
            .await
            .unwrap();

        assert_eq!(store.get("flash").await.unwrap(), None);
        // Lazy expiry removed the key on read
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_future_ttl_keeps_value() {
        let store = MemoryKvStore::new();
        store
            .set_with_ttl("keep", "me", std::time::Duration::from_secs(3600))
            .await
            .unwrap();

        assert_eq!(store.get("keep").await.unwrap(), Some("me".to_string()));
    }

    #[tokio::test]
    async fn test_ttl_elapses_over_time() {
        let store = MemoryKvStore::new();
        store
            .set_with_ttl("brief", "moment", std::time::Duration::from_millis(10))
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert_eq!(store.get("brief").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = MemoryKvStore::new();
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        store.remove("a").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
        assert_eq!(store.len(), 1);

        store.clear().await.unwrap();
        assert!(store.is_empty());
    }
}
