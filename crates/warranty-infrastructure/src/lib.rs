//! # Warranty Infrastructure
//!
//! Storage adapters for the tenant/RBAC core.
//!
//! The [`store::LocalStore`] is a string-keyed record store that stands in
//! for the browser local storage the source console persisted into. A
//! production deployment would swap these adapters for clients of a real
//! identity/tenant service; the core only sees the repository traits.

pub mod store;

pub use store::{LocalBrandStore, LocalPrincipalRegistry, LocalSessionStore, LocalStore};
