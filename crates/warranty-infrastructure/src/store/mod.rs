//! Local record store and repository adapters

pub mod brand_store_impl;
pub mod local;
pub mod registry_impl;
pub mod session_store_impl;

pub use brand_store_impl::LocalBrandStore;
pub use local::LocalStore;
pub use registry_impl::LocalPrincipalRegistry;
pub use session_store_impl::LocalSessionStore;

// Record keys, mirroring the source console's local-storage layout.
pub(crate) const AUTH_USER_KEY: &str = "auth_user";
pub(crate) const AUTH_EXPIRY_KEY: &str = "auth_expiry";
pub(crate) const REGISTERED_USERS_KEY: &str = "registered_users";
pub(crate) const ONBOARDING_BRANDS_KEY: &str = "onboarding_brands";
pub(crate) const ACTIVE_BRAND_KEY: &str = "active_brand";
