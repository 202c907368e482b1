//! Menu permission repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{MenuPermission, Role};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuPermissionRepository: Send + Sync {
    /// All non-deleted grants, including `can_view = false` rows; the
    /// resolver needs those to tell "no grants" apart from "none allow".
    async fn list_active(&self) -> Result<Vec<MenuPermission>, DomainError>;
    async fn grants_for_item(&self, menu_item_id: &Uuid)
        -> Result<Vec<MenuPermission>, DomainError>;
    async fn upsert(&self, grant: &MenuPermission) -> Result<MenuPermission, DomainError>;
    async fn revoke(&self, role: &Role, menu_item_id: &Uuid) -> Result<(), DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}
