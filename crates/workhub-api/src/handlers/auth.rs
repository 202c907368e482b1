// ============================================================================
// WorkHub API - Auth Handlers
// File: crates/workhub-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers

use axum::{extract::State, Json};
use serde::Serialize;
use validator::Validate;

use workhub_core::services::LoginResult;

use crate::dto::LoginRequest;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Authentication response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub employee: EmployeeDto,
    pub roles: Vec<String>,
    pub access_token: String,
    pub refresh_token: String,
    /// Post-login landing route.
    pub redirect: String,
}

/// Employee DTO for responses
#[derive(Debug, Serialize)]
pub struct EmployeeDto {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

impl From<LoginResult> for AuthResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            employee: EmployeeDto {
                id: result.employee.id.to_string(),
                display_name: result.employee.display_name,
                email: result.employee.email,
            },
            roles: result.roles.iter().map(|r| r.to_string()).collect(),
            access_token: result.access_token,
            refresh_token: result.refresh_token,
            redirect: result.redirect,
        }
    }
}

/// Login handler - POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let result = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(ApiResponse::success(AuthResponse::from(result))))
}
