// ============================================================================
// WorkHub Core - Menu Item Entity
// File: crates/workhub-core/src/domain/menu_item.rs
// Description: Navigation menu entry, self-referential tree
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    pub id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Menu name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 100, message = "Menu slug must be between 2 and 100 characters"))]
    pub slug: String,

    #[validate(length(max = 255, message = "Menu route too long"))]
    pub route: Option<String>,

    #[validate(length(max = 100, message = "Menu icon too long"))]
    pub icon: Option<String>,

    pub parent_id: Option<Uuid>,
    pub sort_order: i32,
    pub is_active: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<Uuid>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by: Option<Uuid>,
}

impl MenuItem {
    pub fn new(
        name: String,
        slug: String,
        route: Option<String>,
        icon: Option<String>,
        parent_id: Option<Uuid>,
        sort_order: i32,
        created_by: Option<Uuid>,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            slug: slug.trim().to_lowercase(),
            route: route.map(|r| r.trim().to_string()),
            icon: icon.map(|i| i.trim().to_string()),
            parent_id,
            sort_order,
            is_active: true,
            created_at: Utc::now(),
            created_by,
            modified_at: None,
            modified_by: None,
            removed_at: None,
            removed_by: None,
        };

        item.validate()?;
        Ok(item)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn soft_delete(&mut self, deleted_by: Uuid) {
        self.removed_at = Some(Utc::now());
        self.removed_by = Some(deleted_by);
        self.is_active = false;
    }

    pub fn is_deleted(&self) -> bool {
        self.removed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_menu_item() {
        let item = MenuItem::new(
            "Dashboard".to_string(),
            "Dashboard".to_string(),
            Some("/dashboard".to_string()),
            Some("home".to_string()),
            None,
            1,
            None,
        );
        let item = item.unwrap();
        assert!(item.is_root());
        assert_eq!(item.slug, "dashboard");
        assert!(item.is_active);
    }

    #[test]
    fn test_name_too_short_rejected() {
        let item = MenuItem::new("D".to_string(), "d1".to_string(), None, None, None, 1, None);
        assert!(item.is_err());
    }

    #[test]
    fn test_soft_delete_deactivates() {
        let mut item = MenuItem::new(
            "Reports".to_string(),
            "reports".to_string(),
            None,
            None,
            None,
            2,
            None,
        )
        .unwrap();
        item.soft_delete(Uuid::new_v4());
        assert!(item.is_deleted());
        assert!(!item.is_active);
    }
}
