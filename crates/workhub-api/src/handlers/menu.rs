// ============================================================================
// WorkHub API - Menu Handlers
// File: crates/workhub-api/src/handlers/menu.rs
// ============================================================================
//! Menu HTTP handlers: the requester's resolved menu plus the role-gated
//! administration endpoints. Every mutation invalidates the resolved-menu
//! cache inside the service.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use workhub_core::domain::{MenuItem, MenuNode, MenuPermission, Role};

use crate::dto::{CreateMenuItemRequest, GrantPermissionRequest, UpdateMenuItemRequest};
use crate::error::ApiError;
use crate::middleware::auth::CurrentEmployee;
use crate::middleware::menu::NavigationContext;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/menu
///
/// Returns the menu resolved for the requester by the injection
/// middleware. The extension is absent only when the middleware did not
/// run; an empty list keeps the contract of never failing this path.
pub async fn my_menu(
    navigation: Option<Extension<NavigationContext>>,
) -> Json<ApiResponse<Vec<MenuNode>>> {
    let menu_items = navigation
        .map(|Extension(ctx)| ctx.menu_items)
        .unwrap_or_default();
    Json(ApiResponse::success(menu_items))
}

/// GET /api/v1/admin/menus
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, ApiError> {
    let items = state.menu_service.list_items().await?;
    Ok(Json(ApiResponse::success(items)))
}

/// POST /api/v1/admin/menus
pub async fn create_item(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentEmployee>,
    Json(payload): Json<CreateMenuItemRequest>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let item = MenuItem::new(
        payload.name,
        payload.slug,
        payload.route,
        payload.icon,
        payload.parent_id,
        payload.sort_order,
        Some(current.employee.id),
    )
    .map_err(|e| ApiError::Validation(e.to_string()))?;

    let created = state.menu_service.create_item(item).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// PUT /api/v1/admin/menus/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentEmployee>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMenuItemRequest>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut item = state.menu_service.get_item(&id).await?;
    item.name = payload.name.trim().to_string();
    item.slug = payload.slug.trim().to_lowercase();
    item.route = payload.route.map(|r| r.trim().to_string());
    item.icon = payload.icon.map(|i| i.trim().to_string());
    item.parent_id = payload.parent_id;
    item.sort_order = payload.sort_order;
    item.is_active = payload.is_active;
    item.modified_by = Some(current.employee.id);
    item.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let updated = state.menu_service.update_item(item).await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// DELETE /api/v1/admin/menus/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.menu_service.delete_item(&id).await?;
    Ok(Json(ApiResponse::success(())))
}

/// GET /api/v1/admin/menus/{id}/permissions
pub async fn list_permissions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<MenuPermission>>>, ApiError> {
    let grants = state.menu_service.item_grants(&id).await?;
    Ok(Json(ApiResponse::success(grants)))
}

/// POST /api/v1/admin/menus/{id}/permissions
pub async fn grant_permission(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentEmployee>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GrantPermissionRequest>,
) -> Result<Json<ApiResponse<MenuPermission>>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let grant = state
        .menu_service
        .grant(
            Role::from_name(&payload.role),
            id,
            payload.can_view,
            Some(current.employee.id),
        )
        .await?;
    Ok(Json(ApiResponse::success(grant)))
}

/// DELETE /api/v1/admin/menus/{id}/permissions/{role}
pub async fn revoke_permission(
    State(state): State<AppState>,
    Path((id, role)): Path<(Uuid, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .menu_service
        .revoke(&Role::from_name(&role), &id)
        .await?;
    Ok(Json(ApiResponse::success(())))
}

/// POST /api/v1/admin/menus/cache/clear
pub async fn clear_cache(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    state.menu_service.clear_cache();
    Json(ApiResponse::success(()))
}
