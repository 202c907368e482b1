// ============================================================================
// WorkHub Core - Employee Entity
// File: crates/workhub-core/src/domain/employee.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::role::Role;

/// Employee account entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Employee {
    pub id: Uuid,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 100, message = "Display name must be between 2 and 100 characters"))]
    pub display_name: String,

    pub password_hash: Option<String>,

    /// Legacy single-role field, consulted only when the employee has no
    /// role assignments.
    pub legacy_role: Option<String>,

    /// Stored dashboard preference; wins over any role-derived dashboard.
    pub dashboard_route: Option<String>,

    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<Uuid>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by: Option<Uuid>,
}

impl Employee {
    pub fn new(
        email: String,
        display_name: String,
        password_hash: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let employee = Self {
            id: Uuid::new_v4(),
            email: email.trim().to_lowercase(),
            display_name: display_name.trim().to_string(),
            password_hash,
            legacy_role: None,
            dashboard_route: None,
            is_active: true,
            last_login_at: None,
            created_at: Utc::now(),
            created_by: None,
            modified_at: None,
            modified_by: None,
            removed_at: None,
            removed_by: None,
        };

        employee.validate()?;
        Ok(employee)
    }

    pub fn can_login(&self) -> bool {
        self.is_active && !self.is_deleted() && self.password_hash.is_some()
    }

    pub fn record_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.modified_at = Some(Utc::now());
    }

    /// Role set for this employee: the assignment names when any exist,
    /// otherwise the legacy scalar role as a single-element set.
    pub fn effective_roles(&self, assignments: &[String]) -> Vec<Role> {
        let names: Vec<&str> = if assignments.is_empty() {
            self.legacy_role.as_deref().into_iter().collect()
        } else {
            assignments.iter().map(String::as_str).collect()
        };

        let mut roles = Vec::new();
        for name in names {
            let role = Role::from_name(name);
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        roles
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

    fn employee() -> Employee {
        Employee::new(
            "alice@example.com".to_string(),
            "Alice".to_string(),
            Some("hash".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_create_employee() {
        let emp = employee();
        assert!(emp.can_login());
        assert_eq!(emp.email, "alice@example.com");
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert!(Employee::new("not-an-email".to_string(), "Alice".to_string(), None).is_err());
    }

    #[test]
    fn test_effective_roles_prefers_assignments() {
        let mut emp = employee();
        emp.legacy_role = Some("employee".to_string());
        let roles = emp.effective_roles(&["admin".to_string(), "admin".to_string()]);
        assert_eq!(roles, vec![Role::Admin]);
    }

    #[test]
    fn test_effective_roles_falls_back_to_legacy() {
        let mut emp = employee();
        emp.legacy_role = Some("supervisor".to_string());
        assert_eq!(emp.effective_roles(&[]), vec![Role::Supervisor]);
    }

    #[test]
    fn test_effective_roles_empty_without_legacy() {
        assert!(employee().effective_roles(&[]).is_empty());
    }

    #[test]
    fn test_soft_deleted_cannot_login() {
        let mut emp = employee();
        emp.soft_delete(Uuid::new_v4());
        assert!(!emp.can_login());
    }
}
