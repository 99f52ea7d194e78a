// ============================================================================
// Warranty Core - Session Context
// File: crates/warranty-core/src/context.rs
// Description: Explicit per-session tenant/theme context
// ============================================================================

use crate::domain::TenantConfig;
use crate::theme::{apply_theme, Theme};

/// Explicit session-scoped context.
///
/// Carries the active tenant and the theme derived from it, instead of the
/// ambient global singletons the source design used. One instance exists
/// per browser session; request handling borrows it through application
/// state.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    tenant: Option<TenantConfig>,
    theme: Theme,
}

impl SessionContext {
    pub fn tenant(&self) -> Option<&TenantConfig> {
        self.tenant.as_ref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the active tenant wholesale and re-derive the theme.
    /// `None` falls back to static platform branding.
    pub fn activate_tenant(&mut self, tenant: Option<TenantConfig>) {
        self.theme = Theme::default();
        if let Some(t) = &tenant {
            apply_theme(t, &mut self.theme);
        }
        self.tenant = tenant;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemeMode;

    fn tenant(id: &str, color: &str) -> TenantConfig {
        TenantConfig {
            id: id.into(),
            subdomain: id.into(),
            company_name: format!("{id} Ltd"),
            display_name: id.to_uppercase(),
            primary_color: color.into(),
            industry: "appliances".into(),
            feature_flags: vec![],
            theme_mode: ThemeMode::Light,
        }
    }

    #[test]
    fn test_activation_replaces_wholesale() {
        let mut ctx = SessionContext::default();
        ctx.activate_tenant(Some(tenant("acme", "#00C853")));
        let first_theme = ctx.theme().clone();
        assert!(first_theme.primary_hsl.is_some());

        ctx.activate_tenant(Some(tenant("globex", "#1565C0")));
        assert_ne!(ctx.theme(), &first_theme);
        assert_eq!(ctx.tenant().map(|t| t.id.as_str()), Some("globex"));
    }

    #[test]
    fn test_deactivation_restores_static_branding() {
        let mut ctx = SessionContext::default();
        ctx.activate_tenant(Some(tenant("acme", "#00C853")));
        ctx.activate_tenant(None);
        assert!(ctx.tenant().is_none());
        assert_eq!(ctx.theme(), &Theme::default());
    }
}
