// ============================================================================
// WorkHub Core - Role Hierarchy
// File: crates/workhub-core/src/domain/role.rs
// Description: Closed role enumeration with the fixed privilege hierarchy
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Application role. Known roles form a fixed hierarchy; anything else is
/// carried verbatim as `Unknown` and grants access only to itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Developer,
    Superadmin,
    Admin,
    Supervisor,
    Employee,
    Unknown(String),
}

impl Role {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "developer" => Role::Developer,
            "superadmin" => Role::Superadmin,
            "admin" => Role::Admin,
            "supervisor" => Role::Supervisor,
            "employee" => Role::Employee,
            other => Role::Unknown(other.to_string()),
        }
    }

    pub fn as_name(&self) -> &str {
        match self {
            Role::Developer => "developer",
            Role::Superadmin => "superadmin",
            Role::Admin => "admin",
            Role::Supervisor => "supervisor",
            Role::Employee => "employee",
            Role::Unknown(name) => name,
        }
    }

    /// The ordered set of roles this role subsumes, highest privilege first.
    /// Unknown roles cover only themselves and never escalate.
    pub fn covered_roles(&self) -> Vec<Role> {
        match self {
            Role::Developer => vec![
                Role::Developer,
                Role::Superadmin,
                Role::Admin,
                Role::Supervisor,
                Role::Employee,
            ],
            Role::Superadmin => vec![
                Role::Superadmin,
                Role::Admin,
                Role::Supervisor,
                Role::Employee,
            ],
            Role::Admin => vec![Role::Admin, Role::Supervisor, Role::Employee],
            Role::Supervisor => vec![Role::Supervisor, Role::Employee],
            Role::Employee => vec![Role::Employee],
            Role::Unknown(_) => vec![self.clone()],
        }
    }

    /// Whether a bearer of this role may reach a route gated on `required`.
    pub fn covers(&self, required: &Role) -> bool {
        self.covered_roles().contains(required)
    }

    /// The roles the hierarchy knows about, in privilege order.
    pub fn known() -> [Role; 5] {
        [
            Role::Developer,
            Role::Superadmin,
            Role::Admin,
            Role::Supervisor,
            Role::Employee,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_name())
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Role::from_name(&name)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_name().to_string()
    }
}

/// Persisted role row, kept for administration and reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<Uuid>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by: Option<Uuid>,
}

impl RoleRecord {
    pub fn role(&self) -> Role {
        Role::from_name(&self.name)
    }

    pub fn is_deleted(&self) -> bool {
        self.removed_at.is_some()
    }
}
