// ============================================================================
// Warranty Core - Route Authorization Rule
// File: crates/warranty-core/src/domain/route_rule.rs
// Description: Static per-path role allow-list
// ============================================================================

use super::role::Role;

/// A protected route declaration.
///
/// All matched routes require authentication; an empty role set means any
/// authenticated principal may pass. Rules are declared at configuration
/// time and never mutated at runtime.
#[derive(Debug, Clone)]
pub struct RouteRule {
    /// Path prefix the rule covers (`/platform` covers `/platform/dashboard`).
    pub path: String,
    pub allowed_roles: Vec<Role>,
}

impl RouteRule {
    pub fn restricted(path: impl Into<String>, allowed_roles: Vec<Role>) -> Self {
        Self {
            path: path.into(),
            allowed_roles,
        }
    }

    /// Requires authentication only.
    pub fn any_authenticated(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            allowed_roles: Vec::new(),
        }
    }

    /// Exact match or segment-aligned prefix match.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.path.as_str()) {
            Some("") => true,
            Some(rest) => rest.starts_with('/'),
            None => false,
        }
    }
}
