//! Request and response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warranty_core::domain::{Brand, Principal, Session, TenantConfig};
use warranty_core::theme::Theme;

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Tenant subdomain carried over from the login redirect.
    #[serde(default)]
    pub tenant: Option<String>,
}

/// Principal DTO for responses
#[derive(Debug, Serialize)]
pub struct PrincipalDto {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
}

impl From<&Principal> for PrincipalDto {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id,
            email: principal.email.clone(),
            display_name: principal.display_name.clone(),
            role: principal.role.as_str().to_string(),
            brand_id: principal.brand_id,
            tenant: principal.tenant.clone(),
        }
    }
}

/// Authentication response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub principal: PrincipalDto,
    pub expires_at: DateTime<Utc>,
    /// Canonical landing page for the principal's role.
    pub dashboard_path: String,
}

impl From<&Session> for AuthResponse {
    fn from(session: &Session) -> Self {
        Self {
            principal: PrincipalDto::from(&session.principal),
            expires_at: session.expires_at,
            dashboard_path: session.principal.role.dashboard_path().to_string(),
        }
    }
}

/// Resolved tenant context: the active tenant and the theme derived from it
#[derive(Debug, Serialize)]
pub struct TenantContextDto {
    pub tenant: Option<TenantConfig>,
    pub theme: Theme,
}

/// Brand collection with the active pointer
#[derive(Debug, Serialize)]
pub struct BrandListDto {
    pub brands: Vec<Brand>,
    pub active: Option<Brand>,
}

/// Active-brand switch request; `None` clears the pointer
#[derive(Debug, Deserialize)]
pub struct SetActiveBrandRequest {
    pub brand_id: Option<Uuid>,
}
