//! Role check middleware
//!
//! A route gated on role R is reachable by a requester whose own roles'
//! covered sets contain R. This is the access-control enforcement point;
//! it reads persisted role data via the auth middleware, never the menu
//! cache.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::warn;

use workhub_core::domain::Role;

use crate::error::ApiError;
use crate::middleware::auth::CurrentEmployee;

pub fn covered(roles: &[Role], required: &Role) -> bool {
    roles.iter().any(|r| r.covers(required))
}

pub async fn require_role(
    required: Role,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let current = request
        .extensions()
        .get::<CurrentEmployee>()
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

    if !covered(&current.roles, &required) {
        warn!(
            "Employee {} denied: role {} required",
            current.employee.id, required
        );
        return Err(ApiError::Forbidden(format!("Role {} required", required)));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_role_covers_lower_gate() {
        assert!(covered(&[Role::Superadmin], &Role::Employee));
        assert!(covered(&[Role::Admin], &Role::Supervisor));
    }

    #[test]
    fn test_lower_role_blocked_from_higher_gate() {
        assert!(!covered(&[Role::Employee], &Role::Admin));
        assert!(!covered(&[Role::Supervisor], &Role::Superadmin));
    }

    #[test]
    fn test_unknown_role_blocked_from_known_gate() {
        let editor = Role::from_name("editor");
        assert!(!covered(&[editor.clone()], &Role::Employee));
        assert!(covered(&[editor.clone()], &editor));
    }

    #[test]
    fn test_any_role_in_set_may_cover() {
        assert!(covered(&[Role::Employee, Role::Admin], &Role::Supervisor));
    }
}
