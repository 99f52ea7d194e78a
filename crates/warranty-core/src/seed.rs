// ============================================================================
// Warranty Core - Seeded Demo Data
// File: crates/warranty-core/src/seed.rs
// Description: Known tenant set, demo brand set, and built-in principals
// ============================================================================

use uuid::Uuid;

use crate::domain::{Brand, Principal, RegisteredPrincipal, Role, TenantConfig, ThemeMode};
use crate::error::DomainError;
use warranty_security::PasswordService;

// Stable ids so brand assignments on built-in principals survive reseeding.
pub const BRAND_VOLT_ID: Uuid = Uuid::from_u128(0x6f1a_2c40_9b1e_4d53_8a07_3e5c_1b2d_4e61);
pub const BRAND_AURA_ID: Uuid = Uuid::from_u128(0x2d8e_7f19_4c6a_4b02_9d35_8a1f_6c4e_2b73);
pub const BRAND_NIMBUS_ID: Uuid = Uuid::from_u128(0x915b_3d27_8e0c_4fa6_b482_5d9e_7a1c_3f85);

/// The known tenant set. A real deployment would load this from the
/// platform's tenant provisioning service.
pub fn demo_tenants() -> Vec<TenantConfig> {
    vec![
        TenantConfig {
            id: "acme".into(),
            subdomain: "acme".into(),
            company_name: "Acme Appliances Ltd".into(),
            display_name: "Acme Appliances".into(),
            primary_color: "#00C853".into(),
            industry: "appliances".into(),
            feature_flags: vec!["claims".into(), "inventory".into(), "qr-codes".into()],
            theme_mode: ThemeMode::Light,
        },
        TenantConfig {
            id: "globex".into(),
            subdomain: "globex".into(),
            company_name: "Globex Electronics GmbH".into(),
            display_name: "Globex Electronics".into(),
            primary_color: "#1565C0".into(),
            industry: "electronics".into(),
            feature_flags: vec!["claims".into()],
            theme_mode: ThemeMode::Dark,
        },
    ]
}

/// Fixed demo brand set, used when no onboarding data has been persisted.
/// Collection order matters: the first entry is the implicit active brand.
pub fn demo_brands() -> Vec<Brand> {
    vec![
        brand(BRAND_VOLT_ID, "volt", "Volt Electronics", "#FF6D00"),
        brand(BRAND_AURA_ID, "aura", "Aura Home", "#00C853"),
        brand(BRAND_NIMBUS_ID, "nimbus", "Nimbus Audio", "#6200EA"),
    ]
}

fn brand(id: Uuid, name: &str, display_name: &str, color: &str) -> Brand {
    Brand {
        id,
        name: name.into(),
        display_name: display_name.into(),
        color: color.into(),
        logo: None,
        is_active: true,
        created_at: chrono::Utc::now(),
        updated_at: None,
    }
}

/// Built-in demo principals with their demo passwords, one per
/// platform role.
pub fn builtin_principals() -> Vec<(Principal, &'static str)> {
    vec![
        (
            Principal::new("admin@warrantyhub.io".into(), "Platform Admin".into(), Role::SystemAdmin),
            "admin123",
        ),
        (
            Principal::new("brandadmin@acme.com".into(), "Brand Admin".into(), Role::BrandAdmin),
            "brand123",
        ),
        (
            Principal::new("plant@acme.com".into(), "Assembly Plant".into(), Role::ManufacturingPlant)
                .with_brand(BRAND_VOLT_ID),
            "plant123",
        ),
        (
            Principal::new("warehouse@acme.com".into(), "Plant Warehouse".into(), Role::PlantWarehouse)
                .with_brand(BRAND_VOLT_ID),
            "warehouse123",
        ),
        (
            Principal::new("distributor@acme.com".into(), "Regional Distributor".into(), Role::BrandDistributor)
                .with_brand(BRAND_AURA_ID),
            "distributor123",
        ),
        (
            Principal::new("retailer@acme.com".into(), "Retail Desk".into(), Role::BrandRetailer)
                .with_brand(BRAND_AURA_ID),
            "retailer123",
        ),
        (
            Principal::new("customer@example.com".into(), "Demo Customer".into(), Role::Customer),
            "customer123",
        ),
    ]
}

/// Built-in principals with their demo passwords hashed, ready to hand to
/// the identity service. Hashing happens here, at startup, so plaintext
/// never reaches any store.
pub fn builtin_credentials() -> Result<Vec<RegisteredPrincipal>, DomainError> {
    builtin_principals()
        .into_iter()
        .map(|(principal, password)| {
            let password_hash = PasswordService::hash(password)
                .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;
            Ok(RegisteredPrincipal {
                principal,
                password_hash,
            })
        })
        .collect()
}
