//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    #[error("Another login or signup is already in flight")]
    ConcurrentAuthOperation,

    #[error("Principal not active")]
    PrincipalNotActive,

    #[error("Brand not found: {0}")]
    BrandNotFound(Uuid),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}
