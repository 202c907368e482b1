// ============================================================================
// WorkHub Infrastructure - PostgreSQL Menu Repository
// File: crates/workhub-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use workhub_core::domain::MenuItem;
use workhub_core::error::DomainError;
use workhub_core::repositories::MenuRepository;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub route: Option<String>,
    pub icon: Option<String>,
    pub parent_id: Option<Uuid>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<Uuid>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by: Option<Uuid>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            slug: row.slug,
            route: row.route,
            icon: row.icon,
            parent_id: row.parent_id,
            sort_order: row.sort_order,
            is_active: row.is_active,
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
            removed_at: row.removed_at,
            removed_by: row.removed_by,
        }
    }
}

const MENU_COLUMNS: &str = r#"
    id, name, slug, route, icon, parent_id, sort_order, is_active,
    created_at, created_by, modified_at, modified_by, removed_at, removed_by
"#;

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list_active(&self) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(&format!(
            r#"
            SELECT {MENU_COLUMNS}
            FROM menu_items
            WHERE is_active = TRUE AND removed_at IS NULL
            ORDER BY sort_order, name
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing active menu items: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(&format!(
            r#"
            SELECT {MENU_COLUMNS}
            FROM menu_items
            WHERE removed_at IS NULL
            ORDER BY sort_order, name
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menu items: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(&format!(
            r#"
            SELECT {MENU_COLUMNS}
            FROM menu_items
            WHERE id = $1 AND removed_at IS NULL
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu item by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        info!("Creating menu item: {}", item.slug);

        let row: MenuItemRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO menu_items (
                id, name, slug, route, icon, parent_id, sort_order, is_active,
                created_at, created_by, modified_at, modified_by, removed_at, removed_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {MENU_COLUMNS}
            "#
        ))
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.slug)
        .bind(&item.route)
        .bind(&item.icon)
        .bind(item.parent_id)
        .bind(item.sort_order)
        .bind(item.is_active)
        .bind(item.created_at)
        .bind(item.created_by)
        .bind(item.modified_at)
        .bind(item.modified_by)
        .bind(item.removed_at)
        .bind(item.removed_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating menu item: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::MenuSlugAlreadyExists(item.slug.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let row: MenuItemRow = sqlx::query_as(&format!(
            r#"
            UPDATE menu_items
            SET
                name = $2,
                slug = $3,
                route = $4,
                icon = $5,
                parent_id = $6,
                sort_order = $7,
                is_active = $8,
                modified_at = $9,
                modified_by = $10
            WHERE id = $1 AND removed_at IS NULL
            RETURNING {MENU_COLUMNS}
            "#
        ))
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.slug)
        .bind(&item.route)
        .bind(&item.icon)
        .bind(item.parent_id)
        .bind(item.sort_order)
        .bind(item.is_active)
        .bind(Utc::now())
        .bind(item.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating menu item: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or(DomainError::MenuItemNotFound(item.id))?;

        Ok(row.into())
    }

    async fn set_route(&self, id: &Uuid, route: &str) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE menu_items
            SET route = $2, modified_at = NOW()
            WHERE id = $1 AND removed_at IS NULL
            "#,
        )
        .bind(id)
        .bind(route)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error setting menu route: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MenuItemNotFound(*id));
        }
        Ok(())
    }

    async fn soft_delete(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE menu_items
            SET removed_at = NOW(), is_active = FALSE
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting menu item: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
