// ============================================================================
// Warranty Core - Brand Scope Manager
// File: crates/warranty-core/src/services/brand_scope.rs
// ============================================================================
//! Tracks the known brand collection and the active brand pointer

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{Brand, BrandPatch, NewBrand, Principal};
use crate::error::DomainError;
use crate::repositories::BrandStore;
use crate::seed;

/// Session-scoped brand collection with a single active pointer.
///
/// Seeded once per session: from previously persisted onboarding data when
/// present, otherwise from the fixed demo set. Mutations write through the
/// store so the collection survives a session restart.
pub struct BrandScope<B: BrandStore> {
    store: Arc<B>,
    brands: Vec<Brand>,
    active: Option<Brand>,
}

impl<B: BrandStore> BrandScope<B> {
    pub async fn load(store: Arc<B>) -> Result<Self, DomainError> {
        let brands = match store.load_brands().await? {
            Some(brands) => brands,
            None => {
                info!("No onboarding data, seeding demo brand set");
                seed::demo_brands()
            }
        };

        // The persisted pointer wins if it still names a known brand;
        // otherwise the first brand is implicitly active.
        let active = match store.load_active().await? {
            Some(id) => brands.iter().find(|b| b.id == id).cloned(),
            None => None,
        }
        .or_else(|| brands.first().cloned());

        Ok(Self {
            store,
            brands,
            active,
        })
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn active_brand(&self) -> Option<&Brand> {
        self.active.as_ref()
    }

    /// Switch the active pointer unconditionally; callers are trusted to
    /// pass a known brand.
    pub async fn set_active_brand(&mut self, brand: Option<Brand>) -> Result<(), DomainError> {
        self.active = brand;
        self.persist_active().await
    }

    pub async fn add_brand(&mut self, data: NewBrand) -> Result<Brand, DomainError> {
        let brand = Brand::new(data)?;
        self.brands.push(brand.clone());
        self.persist_brands().await?;
        info!("Added brand: {}", brand.name);
        Ok(brand)
    }

    /// Update a brand in place. When the target is the active brand, the
    /// active pointer's snapshot is refreshed in lockstep.
    pub async fn update_brand(&mut self, id: Uuid, patch: BrandPatch) -> Result<Brand, DomainError> {
        let brand = self
            .brands
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(DomainError::BrandNotFound(id))?;
        brand.apply_patch(patch);
        let updated = brand.clone();

        if self.active.as_ref().is_some_and(|a| a.id == id) {
            self.active = Some(updated.clone());
        }

        self.persist_brands().await?;
        self.persist_active().await?;
        Ok(updated)
    }

    /// Delete a brand. Deleting the active brand promotes the first
    /// remaining brand in collection order, or clears the pointer when
    /// the collection becomes empty.
    pub async fn delete_brand(&mut self, id: Uuid) -> Result<(), DomainError> {
        let before = self.brands.len();
        self.brands.retain(|b| b.id != id);
        if self.brands.len() == before {
            return Err(DomainError::BrandNotFound(id));
        }

        if self.active.as_ref().is_some_and(|a| a.id == id) {
            self.active = self.brands.first().cloned();
        }

        self.persist_brands().await?;
        self.persist_active().await?;
        info!("Deleted brand: {}", id);
        Ok(())
    }

    /// Brands visible to a principal.
    ///
    /// Platform and brand administrators see everything. A brand-scoped
    /// role sees only its assigned brand - and nothing at all until an
    /// assignment is provisioned. Other roles without an assignment keep
    /// the open default.
    pub fn visible_brands(&self, principal: &Principal) -> Vec<Brand> {
        if principal.role.has_full_brand_visibility() {
            return self.brands.clone();
        }
        match principal.brand_id {
            Some(id) => self.brands.iter().filter(|b| b.id == id).cloned().collect(),
            None if principal.role.is_brand_scoped() => Vec::new(),
            None => self.brands.clone(),
        }
    }

    async fn persist_brands(&self) -> Result<(), DomainError> {
        self.store.save_brands(&self.brands).await
    }

    async fn persist_active(&self) -> Result<(), DomainError> {
        self.store
            .save_active(self.active.as_ref().map(|b| b.id))
            .await
    }
}
