// ============================================================================
// Warranty Infrastructure - Local Brand Store
// File: crates/warranty-infrastructure/src/store/brand_store_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use warranty_core::domain::Brand;
use warranty_core::error::DomainError;
use warranty_core::repositories::BrandStore;

use super::{local::LocalStore, ACTIVE_BRAND_KEY, ONBOARDING_BRANDS_KEY};

/// Brand persistence over the local record store.
///
/// `onboarding_brands` holds the collection; its absence means the session
/// seeds the demo set. `active_brand` holds the active pointer's id.
pub struct LocalBrandStore {
    store: Arc<LocalStore>,
}

impl LocalBrandStore {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BrandStore for LocalBrandStore {
    async fn load_brands(&self) -> Result<Option<Vec<Brand>>, DomainError> {
        let Some(raw) = self.store.get(ONBOARDING_BRANDS_KEY).await else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(brands) => Ok(Some(brands)),
            Err(e) => {
                warn!("Malformed brand collection, dropping it: {}", e);
                self.store.remove(ONBOARDING_BRANDS_KEY).await?;
                Ok(None)
            }
        }
    }

    async fn save_brands(&self, brands: &[Brand]) -> Result<(), DomainError> {
        let raw =
            serde_json::to_string(brands).map_err(|e| DomainError::StorageError(e.to_string()))?;
        self.store.set(ONBOARDING_BRANDS_KEY, raw).await
    }

    async fn load_active(&self) -> Result<Option<Uuid>, DomainError> {
        let Some(raw) = self.store.get(ACTIVE_BRAND_KEY).await else {
            return Ok(None);
        };
        match raw.parse::<Uuid>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                warn!("Malformed active-brand pointer, dropping it");
                self.store.remove(ACTIVE_BRAND_KEY).await?;
                Ok(None)
            }
        }
    }

    async fn save_active(&self, active: Option<Uuid>) -> Result<(), DomainError> {
        match active {
            Some(id) => self.store.set(ACTIVE_BRAND_KEY, id.to_string()).await,
            None => self.store.remove(ACTIVE_BRAND_KEY).await,
        }
    }
}
