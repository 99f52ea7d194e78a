// ============================================================================
// Warranty Infrastructure - Local Record Store
// File: crates/warranty-infrastructure/src/store/local.rs
// ============================================================================
//! String-keyed record store, optionally backed by a JSON file

use std::collections::HashMap;
use std::path::PathBuf;

use tokio::sync::RwLock;
use tracing::{info, warn};

use warranty_core::error::DomainError;

/// A small string-keyed record store.
///
/// With a backing path every mutation is flushed to disk as a single JSON
/// object; without one the store lives in memory (tests, ephemeral runs).
/// A backing file that cannot be read or parsed degrades to an empty store
/// - persisted-state corruption must never crash the session.
pub struct LocalStore {
    path: Option<PathBuf>,
    data: RwLock<HashMap<String, String>>,
}

impl LocalStore {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Corrupt store file {}, starting empty: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!("Cannot read store file {}, starting empty: {}", path.display(), e);
                HashMap::new()
            }
        };
        info!("Opened local store at {}", path.display());
        Self {
            path: Some(path),
            data: RwLock::new(data),
        }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.data.read().await.get(key).cloned()
    }

    pub async fn set(&self, key: &str, value: String) -> Result<(), DomainError> {
        let mut data = self.data.write().await;
        data.insert(key.to_string(), value);
        self.flush(&data).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), DomainError> {
        let mut data = self.data.write().await;
        data.remove(key);
        self.flush(&data).await
    }

    async fn flush(&self, data: &HashMap<String, String>) -> Result<(), DomainError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let raw = serde_json::to_string_pretty(data)
            .map_err(|e| DomainError::StorageError(e.to_string()))?;
        tokio::fs::write(path, raw)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_set_get_remove() {
        let store = LocalStore::in_memory();
        assert_eq!(store.get("auth_user").await, None);

        store.set("auth_user", "{}".into()).await.unwrap();
        assert_eq!(store.get("auth_user").await.as_deref(), Some("{}"));

        store.remove("auth_user").await.unwrap();
        assert_eq!(store.get("auth_user").await, None);
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = LocalStore::open(&path).await;
        store.set("auth_expiry", "1754000000000".into()).await.unwrap();
        drop(store);

        let reopened = LocalStore::open(&path).await;
        assert_eq!(
            reopened.get("auth_expiry").await.as_deref(),
            Some("1754000000000")
        );
    }

    #[tokio::test]
    async fn test_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        tokio::fs::write(&path, "not json at all {{{").await.unwrap();

        let store = LocalStore::open(&path).await;
        assert_eq!(store.get("auth_user").await, None);

        // The store stays usable after degradation.
        store.set("auth_user", "{}".into()).await.unwrap();
        assert!(store.get("auth_user").await.is_some());
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("absent.json")).await;
        assert_eq!(store.get("anything").await, None);
    }
}
