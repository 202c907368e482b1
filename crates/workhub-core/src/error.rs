//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Employee not found")]
    EmployeeNotFound,

    #[error("Employee not active")]
    EmployeeNotActive,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(Uuid),

    #[error("Menu slug already exists: {0}")]
    MenuSlugAlreadyExists(String),

    #[error("Parent assignment would create a cycle at menu item {0}")]
    MenuCycle(Uuid),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
