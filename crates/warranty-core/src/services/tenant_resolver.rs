// ============================================================================
// Warranty Core - Tenant Resolver
// File: crates/warranty-core/src/services/tenant_resolver.rs
// ============================================================================
//! Resolves the active tenant configuration from request context

use tracing::{debug, info};

use crate::domain::TenantConfig;
use warranty_shared::types::RuntimeEnv;

/// Resolves the active tenant from the `tenant` query parameter against
/// the known tenant set.
///
/// When nothing matches, a development runtime selects the first known
/// tenant so the console is usable without a provisioned subdomain. That
/// fallback is gated on [`RuntimeEnv::Development`] and is unreachable in
/// production, where an unresolved tenant means static platform branding.
pub struct TenantResolver {
    catalog: Vec<TenantConfig>,
    env: RuntimeEnv,
}

impl TenantResolver {
    pub fn new(catalog: Vec<TenantConfig>, env: RuntimeEnv) -> Self {
        Self { catalog, env }
    }

    pub fn catalog(&self) -> &[TenantConfig] {
        &self.catalog
    }

    /// Resolve a tenant from an explicit request parameter.
    ///
    /// Matches on tenant id first, then subdomain (the login redirect
    /// round-trips the subdomain).
    pub fn resolve(&self, tenant_param: Option<&str>) -> Option<&TenantConfig> {
        if let Some(wanted) = tenant_param {
            if let Some(tenant) = self
                .catalog
                .iter()
                .find(|t| t.id == wanted || t.subdomain == wanted)
            {
                info!("Resolved tenant: {}", tenant.id);
                return Some(tenant);
            }
            debug!("No tenant matches parameter: {}", wanted);
        }

        if self.env.is_development() {
            let fallback = self.catalog.first();
            if let Some(tenant) = fallback {
                debug!("Development fallback tenant: {}", tenant.id);
            }
            return fallback;
        }

        None
    }
}
