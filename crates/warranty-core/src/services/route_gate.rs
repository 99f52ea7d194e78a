// ============================================================================
// Warranty Core - Route Authorization Gate
// File: crates/warranty-core/src/services/route_gate.rs
// ============================================================================
//! Two-stage navigation checkpoint: authentication, then role permission

use tracing::debug;

use crate::domain::{Principal, Role, RouteRule, TenantConfig};
use warranty_shared::constants::LOGIN_PATH;

/// Outcome of a navigation attempt.
///
/// Denials are always redirects, never error pages - restricted routes
/// must not reveal their existence to unauthorized principals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

/// Route authorization gate.
///
/// Every navigation attempt is evaluated fresh; no allow/deny decision is
/// cached across attempts, since session and role state can change between
/// them.
pub struct RouteGate {
    rules: Vec<RouteRule>,
}

impl RouteGate {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// The console's route table: one section per platform role, plus the
    /// account section open to any authenticated principal.
    pub fn with_console_rules() -> Self {
        Self::new(vec![
            RouteRule::restricted("/platform", vec![Role::SystemAdmin]),
            RouteRule::restricted("/brandadmin", vec![Role::BrandAdmin]),
            RouteRule::restricted("/manufacturing", vec![Role::ManufacturingPlant]),
            RouteRule::restricted("/warehouse", vec![Role::PlantWarehouse]),
            RouteRule::restricted("/distributor", vec![Role::BrandDistributor]),
            RouteRule::restricted("/retailer", vec![Role::BrandRetailer]),
            RouteRule::any_authenticated("/account"),
        ])
    }

    pub fn authorize(
        &self,
        path: &str,
        principal: Option<&Principal>,
        tenant: Option<&TenantConfig>,
    ) -> RouteDecision {
        let Some(rule) = self.matching_rule(path) else {
            return RouteDecision::Allow;
        };

        // Stage 1: authentication
        let Some(principal) = principal else {
            debug!("Unauthenticated request to {}, redirecting to login", path);
            return RouteDecision::Redirect(login_redirect(path, tenant));
        };

        // Stage 2: role permission
        if !rule.allowed_roles.is_empty() && !rule.allowed_roles.contains(&principal.role) {
            debug!(
                "Role {} denied for {}, redirecting to its dashboard",
                principal.role.as_str(),
                path
            );
            return RouteDecision::Redirect(principal.role.dashboard_path().to_string());
        }

        RouteDecision::Allow
    }

    /// Longest matching rule wins, so `/platform/billing` can carry a
    /// tighter role set than `/platform`.
    fn matching_rule(&self, path: &str) -> Option<&RouteRule> {
        self.rules
            .iter()
            .filter(|r| r.matches(path))
            .max_by_key(|r| r.path.len())
    }
}

/// Login redirect carrying the original destination, and the tenant
/// subdomain when one is active, so login can restore both.
fn login_redirect(path: &str, tenant: Option<&TenantConfig>) -> String {
    match tenant {
        Some(t) => format!(
            "{}?tenant={}&redirect={}",
            LOGIN_PATH,
            t.subdomain,
            urlencoding::encode(path)
        ),
        None => format!("{}?redirect={}", LOGIN_PATH, urlencoding::encode(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemeMode;

    fn principal(role: Role) -> Principal {
        Principal::new("someone@example.com".into(), "Someone".into(), role)
    }

    fn acme() -> TenantConfig {
        TenantConfig {
            id: "acme".into(),
            subdomain: "acme".into(),
            company_name: "Acme Appliances Ltd".into(),
            display_name: "Acme Appliances".into(),
            primary_color: "#00C853".into(),
            industry: "appliances".into(),
            feature_flags: vec![],
            theme_mode: ThemeMode::Light,
        }
    }

    #[test]
    fn test_unauthenticated_redirects_to_login_with_original_path() {
        let gate = RouteGate::with_console_rules();
        let decision = gate.authorize("/platform/dashboard", None, None);
        assert_eq!(
            decision,
            RouteDecision::Redirect("/login?redirect=%2Fplatform%2Fdashboard".into())
        );
    }

    #[test]
    fn test_unauthenticated_redirect_preserves_tenant_context() {
        let gate = RouteGate::with_console_rules();
        let tenant = acme();
        let decision = gate.authorize("/retailer/dashboard", None, Some(&tenant));
        assert_eq!(
            decision,
            RouteDecision::Redirect("/login?tenant=acme&redirect=%2Fretailer%2Fdashboard".into())
        );
    }

    #[test]
    fn test_wrong_role_redirects_to_its_own_dashboard() {
        let gate = RouteGate::with_console_rules();
        let retailer = principal(Role::BrandRetailer);
        let decision = gate.authorize("/platform/dashboard", Some(&retailer), None);
        assert_eq!(decision, RouteDecision::Redirect("/retailer/dashboard".into()));
    }

    #[test]
    fn test_role_without_dashboard_redirects_to_root() {
        let gate = RouteGate::with_console_rules();
        let customer = principal(Role::Customer);
        let decision = gate.authorize("/platform/dashboard", Some(&customer), None);
        assert_eq!(decision, RouteDecision::Redirect("/".into()));
    }

    #[test]
    fn test_matching_role_is_allowed() {
        let gate = RouteGate::with_console_rules();
        let admin = principal(Role::SystemAdmin);
        assert_eq!(
            gate.authorize("/platform/dashboard", Some(&admin), None),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_empty_role_set_admits_any_authenticated_principal() {
        let gate = RouteGate::with_console_rules();
        let customer = principal(Role::Customer);
        assert_eq!(gate.authorize("/account", Some(&customer), None), RouteDecision::Allow);
        assert!(matches!(
            gate.authorize("/account", None, None),
            RouteDecision::Redirect(_)
        ));
    }

    #[test]
    fn test_unmatched_paths_are_public() {
        let gate = RouteGate::with_console_rules();
        assert_eq!(gate.authorize("/", None, None), RouteDecision::Allow);
        assert_eq!(gate.authorize("/login", None, None), RouteDecision::Allow);
    }

    #[test]
    fn test_longest_prefix_wins() {
        let gate = RouteGate::new(vec![
            RouteRule::restricted("/platform", vec![Role::SystemAdmin]),
            RouteRule::restricted("/platform/billing", vec![Role::BrandAdmin]),
        ]);
        let admin = principal(Role::SystemAdmin);
        // The tighter rule on /platform/billing shadows the broad one.
        assert!(matches!(
            gate.authorize("/platform/billing", Some(&admin), None),
            RouteDecision::Redirect(_)
        ));
        assert_eq!(
            gate.authorize("/platform/dashboard", Some(&admin), None),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_each_attempt_is_evaluated_fresh() {
        let gate = RouteGate::with_console_rules();
        let retailer = principal(Role::BrandRetailer);
        assert!(matches!(
            gate.authorize("/platform/dashboard", Some(&retailer), None),
            RouteDecision::Redirect(_)
        ));
        // Logout in another tab: same path, no principal, different outcome.
        assert!(matches!(
            gate.authorize("/platform/dashboard", None, None),
            RouteDecision::Redirect(_)
        ));
        assert_eq!(
            gate.authorize("/retailer/dashboard", Some(&retailer), None),
            RouteDecision::Allow
        );
    }
}
