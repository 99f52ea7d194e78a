// ============================================================================
// Warranty Core - Tenant Configuration Entity
// File: crates/warranty-core/src/domain/tenant.rs
// Description: Organization-level branding and feature configuration
// ============================================================================

use serde::{Deserialize, Serialize};

/// Theme mode applied with the tenant's branding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

/// Tenant configuration.
///
/// Resolved once per session bootstrap from request context and replaced
/// wholesale when the context changes; never persisted beyond the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantConfig {
    /// Unique id within the known tenant set, carried by the `tenant`
    /// query parameter.
    pub id: String,
    pub subdomain: String,
    pub company_name: String,
    pub display_name: String,
    /// Primary brand color as `#RRGGBB`.
    pub primary_color: String,
    pub industry: String,
    pub feature_flags: Vec<String>,
    pub theme_mode: ThemeMode,
}

impl TenantConfig {
    pub fn has_feature(&self, flag: &str) -> bool {
        self.feature_flags.iter().any(|f| f == flag)
    }
}
