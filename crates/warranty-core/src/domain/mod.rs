//! # Warranty Core - Domain Module
//!
//! Domain entities for the tenant/RBAC core.

pub mod brand;
pub mod principal;
pub mod role;
pub mod route_rule;
pub mod session;
pub mod tenant;

// Re-export all entities and enums
pub use brand::{Brand, BrandPatch, NewBrand};
pub use principal::{NewAccount, Principal, RegisteredPrincipal};
pub use role::Role;
pub use route_rule::RouteRule;
pub use session::Session;
pub use tenant::{TenantConfig, ThemeMode};
