// src/repositories/key_store.rs - Data access
use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::Entry;

type Result<T> = std::result::Result<T, StoreError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// Stores a mapping, replacing any entry already held under the same key
    ///
    /// ### Arguments
    /// * `key` - The short key
    /// * `url` - The original URL, stored verbatim
    async fn put(&self, key: &str, url: &str);

    /// Stores a mapping only if the key is free
    ///
    /// The check and the insert happen under one lock, so two writers racing
    /// for the same key cannot both succeed.
    ///
    /// ### Returns
    /// * `Option<Entry>` - The new entry, or `None` if the key was taken
    async fn insert_new(&self, key: &str, url: &str) -> Option<Entry>;

    /// Looks up the original URL for a short key
    ///
    /// ### Errors
    /// * `StoreError::NotFound` - If no entry exists for `key`
    async fn get(&self, key: &str) -> Result<String>;

    /// Returns whether an entry exists for `key`
    async fn contains(&self, key: &str) -> bool;

    /// Snapshot of every live entry, ordered by short key
    async fn entries(&self) -> Vec<Entry>;

    /// Number of live entries
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Process-lifetime store; nothing survives a restart
#[derive(Debug, Default)]
pub struct InMemoryKeyStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyStore for InMemoryKeyStore {
    async fn put(&self, key: &str, url: &str) {
        let mut entries = self.entries.write().await;
        if entries.insert(key.to_string(), Entry::new(key, url)).is_some() {
            debug!("Overwrote existing entry for key '{}'", key);
        }
    }

    async fn insert_new(&self, key: &str, url: &str) -> Option<Entry> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(key) {
            return None;
        }
        let entry = Entry::new(key, url);
        entries.insert(key.to_string(), entry.clone());
        Some(entry)
    }

    async fn get(&self, key: &str) -> Result<String> {
        self.entries
            .read()
            .await
            .get(key)
            .map(|entry| entry.original_url.clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    async fn entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.entries.read().await.values().cloned().collect();
        entries.sort_by(|a, b| a.short_key.cmp(&b.short_key));
        entries
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = InMemoryKeyStore::new();
        store.put("abcdEFGH", "https://example.com").await;

        assert_eq!(store.get("abcdEFGH").await.unwrap(), "https://example.com");
        assert!(store.contains("abcdEFGH").await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = InMemoryKeyStore::new();
        assert_eq!(
            store.get("missing1").await,
            Err(StoreError::NotFound("missing1".to_string()))
        );
        assert!(!store.contains("missing1").await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = InMemoryKeyStore::new();
        store.put("k0000000", "https://first.example").await;
        store.put("k0000000", "https://second.example").await;

        assert_eq!(store.get("k0000000").await.unwrap(), "https://second.example");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_new_keeps_existing_entry() {
        let store = InMemoryKeyStore::new();
        let entry = store.insert_new("k0000000", "https://first.example").await.unwrap();
        assert_eq!(entry.short_key, "k0000000");
        assert!(store.insert_new("k0000000", "https://second.example").await.is_none());

        assert_eq!(store.get("k0000000").await.unwrap(), "https://first.example");
    }

    #[tokio::test]
    async fn test_entries_sorted_by_key() {
        let store = InMemoryKeyStore::new();
        store.put("bbbbbbbb", "https://b.example").await;
        store.put("aaaaaaaa", "https://a.example").await;
        store.put("cccccccc", "https://c.example").await;

        let keys: Vec<String> = store.entries().await.into_iter().map(|e| e.short_key).collect();
        assert_eq!(keys, vec!["aaaaaaaa", "bbbbbbbb", "cccccccc"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_insert_new_has_single_winner() {
        let store = Arc::new(InMemoryKeyStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .insert_new("samekey1", &format!("https://{}.example", i))
                        .await
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(store.len().await, 1);
    }
}
