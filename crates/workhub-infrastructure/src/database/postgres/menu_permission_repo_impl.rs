// ============================================================================
// WorkHub Infrastructure - PostgreSQL Menu Permission Repository
// File: crates/workhub-infrastructure/src/database/postgres/menu_permission_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use workhub_core::domain::{MenuPermission, Role};
use workhub_core::error::DomainError;
use workhub_core::repositories::MenuPermissionRepository;

pub struct PgMenuPermissionRepository {
    pool: PgPool,
}

impl PgMenuPermissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuPermissionRow {
    pub id: Uuid,
    pub role_name: String,
    pub menu_item_id: Uuid,
    pub can_view: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<Uuid>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by: Option<Uuid>,
}

impl From<MenuPermissionRow> for MenuPermission {
    fn from(row: MenuPermissionRow) -> Self {
        MenuPermission {
            id: row.id,
            role: Role::from_name(&row.role_name),
            menu_item_id: row.menu_item_id,
            can_view: row.can_view,
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
            removed_at: row.removed_at,
            removed_by: row.removed_by,
        }
    }
}

const PERMISSION_COLUMNS: &str = r#"
    id, role_name, menu_item_id, can_view,
    created_at, created_by, modified_at, modified_by, removed_at, removed_by
"#;

#[async_trait]
impl MenuPermissionRepository for PgMenuPermissionRepository {
    async fn list_active(&self) -> Result<Vec<MenuPermission>, DomainError> {
        let rows: Vec<MenuPermissionRow> = sqlx::query_as(&format!(
            r#"
            SELECT {PERMISSION_COLUMNS}
            FROM menu_permissions
            WHERE removed_at IS NULL
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menu permissions: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn grants_for_item(
        &self,
        menu_item_id: &Uuid,
    ) -> Result<Vec<MenuPermission>, DomainError> {
        let rows: Vec<MenuPermissionRow> = sqlx::query_as(&format!(
            r#"
            SELECT {PERMISSION_COLUMNS}
            FROM menu_permissions
            WHERE menu_item_id = $1 AND removed_at IS NULL
            "#
        ))
        .bind(menu_item_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing grants for menu item: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn upsert(&self, grant: &MenuPermission) -> Result<MenuPermission, DomainError> {
        info!(
            "Upserting menu permission: role={} item={} can_view={}",
            grant.role, grant.menu_item_id, grant.can_view
        );

        let row: MenuPermissionRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO menu_permissions (
                id, role_name, menu_item_id, can_view,
                created_at, created_by, modified_at, modified_by, removed_at, removed_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (role_name, menu_item_id) WHERE removed_at IS NULL
            DO UPDATE SET
                can_view = EXCLUDED.can_view,
                modified_at = NOW(),
                modified_by = EXCLUDED.created_by
            RETURNING {PERMISSION_COLUMNS}
            "#
        ))
        .bind(grant.id)
        .bind(grant.role.as_name())
        .bind(grant.menu_item_id)
        .bind(grant.can_view)
        .bind(grant.created_at)
        .bind(grant.created_by)
        .bind(grant.modified_at)
        .bind(grant.modified_by)
        .bind(grant.removed_at)
        .bind(grant.removed_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error upserting menu permission: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn revoke(&self, role: &Role, menu_item_id: &Uuid) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE menu_permissions
            SET removed_at = NOW()
            WHERE role_name = $1 AND menu_item_id = $2 AND removed_at IS NULL
            "#,
        )
        .bind(role.as_name())
        .bind(menu_item_id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error revoking menu permission: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM menu_permissions WHERE removed_at IS NULL
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error counting menu permissions: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(count)
    }
}
