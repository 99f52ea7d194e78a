// ============================================================================
// Warranty Infrastructure - Local Session Store
// File: crates/warranty-infrastructure/src/store/session_store_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use tracing::warn;

use warranty_core::domain::{Principal, Session};
use warranty_core::error::DomainError;
use warranty_core::repositories::SessionStore;

use super::{local::LocalStore, AUTH_EXPIRY_KEY, AUTH_USER_KEY};

/// Session persistence over the local record store.
///
/// Layout mirrors the source console: `auth_user` holds the JSON principal
/// snapshot (no credential material), `auth_expiry` a string-encoded
/// epoch-millisecond timestamp. Malformed records are purged and read as
/// "no session".
pub struct LocalSessionStore {
    store: Arc<LocalStore>,
}

impl LocalSessionStore {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    async fn purge(&self) -> Result<(), DomainError> {
        self.store.remove(AUTH_USER_KEY).await?;
        self.store.remove(AUTH_EXPIRY_KEY).await
    }
}

#[async_trait]
impl SessionStore for LocalSessionStore {
    async fn load(&self) -> Result<Option<Session>, DomainError> {
        let (Some(raw_user), Some(raw_expiry)) = (
            self.store.get(AUTH_USER_KEY).await,
            self.store.get(AUTH_EXPIRY_KEY).await,
        ) else {
            return Ok(None);
        };

        let principal = match serde_json::from_str::<Principal>(&raw_user) {
            Ok(p) => p,
            Err(e) => {
                warn!("Malformed persisted principal, clearing session: {}", e);
                self.purge().await?;
                return Ok(None);
            }
        };

        let expires_at = match raw_expiry
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis)
        {
            Some(ts) => ts,
            None => {
                warn!("Malformed session expiry, clearing session");
                self.purge().await?;
                return Ok(None);
            }
        };

        Ok(Some(Session {
            principal,
            expires_at,
        }))
    }

    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let raw_user = serde_json::to_string(&session.principal)
            .map_err(|e| DomainError::StorageError(e.to_string()))?;
        self.store.set(AUTH_USER_KEY, raw_user).await?;
        self.store
            .set(
                AUTH_EXPIRY_KEY,
                session.expires_at.timestamp_millis().to_string(),
            )
            .await
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.purge().await
    }
}
