//! Principal registry trait (port)
//!
//! Holds accounts created through signup. Built-in demo principals live in
//! the identity service itself, not here.

use async_trait::async_trait;

use crate::domain::RegisteredPrincipal;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrincipalRegistry: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<RegisteredPrincipal>, DomainError>;
    async fn create(&self, record: &RegisteredPrincipal) -> Result<RegisteredPrincipal, DomainError>;
}
