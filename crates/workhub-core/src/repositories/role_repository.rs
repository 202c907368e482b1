//! Role repository trait (port)

use async_trait::async_trait;

use crate::domain::RoleRecord;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<RoleRecord>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}
