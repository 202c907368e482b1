// ============================================================================
// WorkHub Core - Menu Permission Entity
// File: crates/workhub-core/src/domain/menu_permission.rs
// Description: Role-to-menu-item view grant
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// Permission grant stating whether a role may view a menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuPermission {
    pub id: Uuid,
    pub role: Role,
    pub menu_item_id: Uuid,
    pub can_view: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<Uuid>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by: Option<Uuid>,
}

impl MenuPermission {
    pub fn new(role: Role, menu_item_id: Uuid, can_view: bool, created_by: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            menu_item_id,
            can_view,
            created_at: Utc::now(),
            created_by,
            modified_at: None,
            modified_by: None,
            removed_at: None,
            removed_by: None,
        }
    }

    /// Whether this grant makes the item visible to any of `roles`.
    pub fn grants_view_to(&self, roles: &[Role]) -> bool {
        self.can_view && roles.contains(&self.role)
    }

    pub fn soft_delete(&mut self, deleted_by: Uuid) {
        self.removed_at = Some(Utc::now());
        self.removed_by = Some(deleted_by);
    }

    pub fn is_deleted(&self) -> bool {
        self.removed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grants_view_to_matching_role() {
        let grant = MenuPermission::new(Role::Admin, Uuid::new_v4(), true, None);
        assert!(grant.grants_view_to(&[Role::Admin, Role::Employee]));
        assert!(!grant.grants_view_to(&[Role::Employee]));
    }

    #[test]
    fn test_can_view_false_never_grants() {
        let grant = MenuPermission::new(Role::Admin, Uuid::new_v4(), false, None);
        assert!(!grant.grants_view_to(&[Role::Admin]));
    }
}
