//! Authentication middleware
//!
//! Validates the bearer token and attaches the current employee, with the
//! effective role set, to the request extensions.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use workhub_core::domain::{Employee, Role};

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated requester, available to downstream middleware and handlers.
#[derive(Clone)]
pub struct CurrentEmployee {
    pub employee: Employee,
    pub roles: Vec<Role>,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    let claims = state
        .jwt
        .validate_access_token(token)
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    let employee_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| ApiError::Unauthorized("Malformed token subject".to_string()))?;

    let employee = state
        .employees
        .find_by_id(&employee_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Account not found".to_string()))?;

    if !employee.is_active {
        return Err(ApiError::Unauthorized("Account disabled".to_string()));
    }

    let assignments = state.employees.role_names(&employee_id).await?;
    let roles = employee.effective_roles(&assignments);
    debug!("Authenticated employee {} with roles {:?}", employee_id, roles);

    request
        .extensions_mut()
        .insert(CurrentEmployee { employee, roles });

    Ok(next.run(request).await)
}
