// ============================================================================
// WorkHub Infrastructure - PostgreSQL Employee Repository
// File: crates/workhub-infrastructure/src/database/postgres/employee_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use workhub_core::domain::Employee;
use workhub_core::error::DomainError;
use workhub_core::repositories::EmployeeRepository;

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct EmployeeRow {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub password_hash: Option<String>,
    pub legacy_role: Option<String>,
    pub dashboard_route: Option<String>,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<Uuid>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by: Option<Uuid>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            email: row.email,
            display_name: row.display_name,
            password_hash: row.password_hash,
            legacy_role: row.legacy_role,
            dashboard_route: row.dashboard_route,
            is_active: row.is_active,
            last_login_at: row.last_login_at,
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
            removed_at: row.removed_at,
            removed_by: row.removed_by,
        }
    }
}

const EMPLOYEE_COLUMNS: &str = r#"
    id, email, display_name, password_hash, legacy_role, dashboard_route,
    is_active, last_login_at,
    created_at, created_by, modified_at, modified_by, removed_at, removed_by
"#;

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Employee>, DomainError> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employees
            WHERE id = $1 AND removed_at IS NULL
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding employee by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employees
            WHERE LOWER(email) = LOWER($1) AND removed_at IS NULL
            "#
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding employee by email: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    async fn role_names(&self, employee_id: &Uuid) -> Result<Vec<String>, DomainError> {
        let names: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT r.name
            FROM roles r
            JOIN employee_roles er ON er.role_id = r.id
            WHERE er.employee_id = $1
              AND er.removed_at IS NULL
              AND r.removed_at IS NULL
            ORDER BY r.name
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing employee roles: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(names)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let row: EmployeeRow = sqlx::query_as(&format!(
            r#"
            UPDATE employees
            SET
                email = $2,
                display_name = $3,
                password_hash = $4,
                legacy_role = $5,
                dashboard_route = $6,
                is_active = $7,
                last_login_at = $8,
                modified_at = $9,
                modified_by = $10,
                removed_at = $11,
                removed_by = $12
            WHERE id = $1
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        ))
        .bind(employee.id)
        .bind(&employee.email)
        .bind(&employee.display_name)
        .bind(&employee.password_hash)
        .bind(&employee.legacy_role)
        .bind(&employee.dashboard_route)
        .bind(employee.is_active)
        .bind(employee.last_login_at)
        .bind(employee.modified_at)
        .bind(employee.modified_by)
        .bind(employee.removed_at)
        .bind(employee.removed_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating employee: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }
}
