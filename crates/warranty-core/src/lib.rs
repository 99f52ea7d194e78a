//! # Warranty Core
//!
//! Domain entities, services, and repository traits for the tenant/brand
//! resolution and route-authorization core of the warranty platform.

pub mod context;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod theme;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
