// ============================================================================
// Warranty Core - Role Enumeration
// File: crates/warranty-core/src/domain/role.rs
// Description: Closed role set with canonical dashboard routing
// ============================================================================

use serde::{Deserialize, Serialize};

/// Role enumeration.
///
/// The platform-specific roles map onto the warranty supply chain; the
/// generic `Admin` / `Manager` / `User` roles are reserved for accounts
/// created through the open signup flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SystemAdmin,
    BrandAdmin,
    ManufacturingPlant,
    PlantWarehouse,
    BrandDistributor,
    BrandRetailer,
    Customer,
    Admin,
    Manager,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SystemAdmin => "system-admin",
            Role::BrandAdmin => "brand-admin",
            Role::ManufacturingPlant => "manufacturing-plant",
            Role::PlantWarehouse => "plant-warehouse",
            Role::BrandDistributor => "brand-distributor",
            Role::BrandRetailer => "brand-retailer",
            Role::Customer => "customer",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "system-admin" => Some(Role::SystemAdmin),
            "brand-admin" => Some(Role::BrandAdmin),
            "manufacturing-plant" => Some(Role::ManufacturingPlant),
            "plant-warehouse" => Some(Role::PlantWarehouse),
            "brand-distributor" => Some(Role::BrandDistributor),
            "brand-retailer" => Some(Role::BrandRetailer),
            "customer" => Some(Role::Customer),
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// Canonical dashboard path for the role.
    ///
    /// Used both for the post-login landing redirect and as the denial
    /// target of the route gate. Roles without a dedicated dashboard land
    /// on the application root.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::SystemAdmin => "/platform/dashboard",
            Role::BrandAdmin => "/brandadmin/dashboard",
            Role::ManufacturingPlant => "/manufacturing/dashboard",
            Role::PlantWarehouse => "/warehouse/dashboard",
            Role::BrandDistributor => "/distributor/dashboard",
            Role::BrandRetailer => "/retailer/dashboard",
            Role::Customer | Role::Admin | Role::Manager | Role::User => "/",
        }
    }

    /// Top-level platform administrator: operates across all tenants, so no
    /// tenant hint is ever attached to their session.
    pub fn is_unrestricted_admin(&self) -> bool {
        matches!(self, Role::SystemAdmin)
    }

    /// Roles that see the full brand collection regardless of assignment.
    pub fn has_full_brand_visibility(&self) -> bool {
        matches!(self, Role::SystemAdmin | Role::BrandAdmin)
    }

    /// Roles whose view of the platform is scoped to a single brand.
    pub fn is_brand_scoped(&self) -> bool {
        matches!(
            self,
            Role::ManufacturingPlant
                | Role::PlantWarehouse
                | Role::BrandDistributor
                | Role::BrandRetailer
        )
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}
