// ============================================================================
// Warranty Core - Principal Entity
// File: crates/warranty-core/src/domain/principal.rs
// Description: Authenticated actor with role and scope assignments
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::role::Role;

/// An authenticated actor.
///
/// The snapshot persisted with a session carries no credential material;
/// the password hash lives only on the [`RegisteredPrincipal`] registry
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Principal {
    pub id: Uuid,

    #[validate(email)]
    pub email: String,
    pub display_name: String,

    pub role: Role,

    /// Brand this principal operates in. A brand-scoped role carries zero
    /// or one assignment, never more.
    pub brand_id: Option<Uuid>,

    /// Tenant subdomain attached at login, except for the unrestricted
    /// platform administrator.
    pub tenant: Option<String>,

    pub is_active: bool,
}

impl Principal {
    pub fn new(email: String, display_name: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.trim().to_lowercase(),
            display_name: display_name.trim().to_string(),
            role,
            brand_id: None,
            tenant: None,
            is_active: true,
        }
    }

    pub fn with_brand(mut self, brand_id: Uuid) -> Self {
        self.brand_id = Some(brand_id);
        self
    }

    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }
}

/// Registry record: a principal plus its Argon2 password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredPrincipal {
    pub principal: Principal,
    pub password_hash: String,
}

/// Signup payload. Validated at the API boundary.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAccount {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 100, message = "Display name must be between 2 and 100 characters"))]
    pub display_name: String,

    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,
}
