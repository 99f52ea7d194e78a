// ============================================================================
// Warranty Core - Brand Entity
// File: crates/warranty-core/src/domain/brand.rs
// Description: Sub-tenant brand scoping unit
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;

/// A product brand within an organization; distinct from the tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: Uuid,
    /// URL-safe internal name: lowercase alphanumerics only.
    pub name: String,
    pub display_name: String,
    pub color: String,
    pub logo: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields required to create a new brand.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewBrand {
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 100, message = "Display name must be between 2 and 100 characters"))]
    pub display_name: String,

    pub color: String,
    pub logo: Option<String>,
}

/// Fields that can be updated on an existing brand.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandPatch {
    pub display_name: Option<String>,
    pub color: Option<String>,
    pub logo: Option<String>,
    pub is_active: Option<bool>,
}

fn is_url_safe(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

impl Brand {
    pub fn new(data: NewBrand) -> Result<Self, DomainError> {
        data.validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        if !is_url_safe(&data.name) {
            return Err(DomainError::ValidationError(format!(
                "Brand name must be lowercase alphanumeric: {}",
                data.name
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: data.name,
            display_name: data.display_name.trim().to_string(),
            color: data.color,
            logo: data.logo,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    pub fn apply_patch(&mut self, patch: BrandPatch) {
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(logo) = patch.logo {
            self.logo = Some(logo);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Some(Utc::now());
    }
}
