//! Repository traits (ports)

pub mod brand_store;
pub mod principal_registry;
pub mod session_store;

pub use brand_store::BrandStore;
pub use principal_registry::PrincipalRegistry;
pub use session_store::SessionStore;

#[cfg(test)]
pub use brand_store::MockBrandStore;
#[cfg(test)]
pub use principal_registry::MockPrincipalRegistry;
#[cfg(test)]
pub use session_store::MockSessionStore;
