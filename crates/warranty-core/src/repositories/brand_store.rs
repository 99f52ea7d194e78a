//! Brand store trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Brand;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandStore: Send + Sync {
    /// `None` means no onboarding data has ever been persisted; the caller
    /// seeds the demo set in that case.
    async fn load_brands(&self) -> Result<Option<Vec<Brand>>, DomainError>;
    async fn save_brands(&self, brands: &[Brand]) -> Result<(), DomainError>;
    async fn load_active(&self) -> Result<Option<Uuid>, DomainError>;
    async fn save_active(&self, active: Option<Uuid>) -> Result<(), DomainError>;
}
