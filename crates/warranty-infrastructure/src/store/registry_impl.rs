// ============================================================================
// Warranty Infrastructure - Local Principal Registry
// File: crates/warranty-infrastructure/src/store/registry_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use warranty_core::domain::RegisteredPrincipal;
use warranty_core::error::DomainError;
use warranty_core::repositories::PrincipalRegistry;

use super::{local::LocalStore, REGISTERED_USERS_KEY};

/// Signup registry over the local record store.
///
/// The whole registry is one JSON array under `registered_users`. Records
/// carry the Argon2 hash, never the plaintext password. A malformed array
/// degrades to an empty registry.
pub struct LocalPrincipalRegistry {
    store: Arc<LocalStore>,
}

impl LocalPrincipalRegistry {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    async fn read_all(&self) -> Result<Vec<RegisteredPrincipal>, DomainError> {
        let Some(raw) = self.store.get(REGISTERED_USERS_KEY).await else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("Malformed principal registry, starting empty: {}", e);
                self.store.remove(REGISTERED_USERS_KEY).await?;
                Ok(Vec::new())
            }
        }
    }

    async fn write_all(&self, records: &[RegisteredPrincipal]) -> Result<(), DomainError> {
        let raw =
            serde_json::to_string(records).map_err(|e| DomainError::StorageError(e.to_string()))?;
        self.store.set(REGISTERED_USERS_KEY, raw).await
    }
}

#[async_trait]
impl PrincipalRegistry for LocalPrincipalRegistry {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<RegisteredPrincipal>, DomainError> {
        let records = self.read_all().await?;
        Ok(records.into_iter().find(|r| r.principal.email == email))
    }

    async fn create(
        &self,
        record: &RegisteredPrincipal,
    ) -> Result<RegisteredPrincipal, DomainError> {
        let mut records = self.read_all().await?;
        records.push(record.clone());
        self.write_all(&records).await?;
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warranty_core::domain::{Principal, Role};

    fn registry() -> LocalPrincipalRegistry {
        LocalPrincipalRegistry::new(Arc::new(LocalStore::in_memory()))
    }

    fn record(email: &str) -> RegisteredPrincipal {
        RegisteredPrincipal {
            principal: Principal::new(email.into(), "Someone".into(), Role::User),
            password_hash: "$argon2id$fake-hash".into(),
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let registry = registry();
        assert!(registry.find_by_email("new@example.com").await.unwrap().is_none());

        registry.create(&record("new@example.com")).await.unwrap();
        let found = registry.find_by_email("new@example.com").await.unwrap().unwrap();
        assert_eq!(found.principal.email, "new@example.com");
        assert_eq!(found.password_hash, "$argon2id$fake-hash");
    }

    #[tokio::test]
    async fn test_creation_appends() {
        let registry = registry();
        registry.create(&record("a@example.com")).await.unwrap();
        registry.create(&record("b@example.com")).await.unwrap();
        assert!(registry.find_by_email("a@example.com").await.unwrap().is_some());
        assert!(registry.find_by_email("b@example.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_malformed_registry_degrades_to_empty() {
        let registry = registry();
        registry
            .store
            .set(REGISTERED_USERS_KEY, "[{broken".into())
            .await
            .unwrap();

        assert!(registry.find_by_email("a@example.com").await.unwrap().is_none());
        // Subsequent writes start from a clean slate.
        registry.create(&record("a@example.com")).await.unwrap();
        assert!(registry.find_by_email("a@example.com").await.unwrap().is_some());
    }
}
