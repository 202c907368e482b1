//! Menu repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::MenuItem;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Active, non-deleted items ordered by sort_order then name.
    async fn list_active(&self) -> Result<Vec<MenuItem>, DomainError>;
    /// All non-deleted items, same ordering.
    async fn list_all(&self) -> Result<Vec<MenuItem>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError>;
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    async fn set_route(&self, id: &Uuid, route: &str) -> Result<(), DomainError>;
    async fn soft_delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
