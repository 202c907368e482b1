//! Dashboard handler
//!
//! Resolves the generic dashboard URL to the requester's canonical
//! landing route, exactly as the post-login redirect does.

use axum::{Extension, Json};
use serde::Serialize;

use workhub_core::services::resolve_dashboard;

use crate::middleware::auth::CurrentEmployee;
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub redirect: String,
}

/// GET /api/v1/dashboard
pub async fn resolve(
    Extension(current): Extension<CurrentEmployee>,
) -> Json<ApiResponse<DashboardResponse>> {
    let redirect = resolve_dashboard(&current.employee, &current.roles);
    Json(ApiResponse::success(DashboardResponse { redirect }))
}
