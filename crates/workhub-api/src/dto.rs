//! Request payloads

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    #[validate(length(min = 2, max = 100, message = "Menu name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 100, message = "Menu slug must be between 2 and 100 characters"))]
    pub slug: String,

    #[validate(length(max = 255, message = "Menu route too long"))]
    pub route: Option<String>,

    #[validate(length(max = 100, message = "Menu icon too long"))]
    pub icon: Option<String>,

    pub parent_id: Option<Uuid>,

    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMenuItemRequest {
    #[validate(length(min = 2, max = 100, message = "Menu name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 100, message = "Menu slug must be between 2 and 100 characters"))]
    pub slug: String,

    #[validate(length(max = 255, message = "Menu route too long"))]
    pub route: Option<String>,

    #[validate(length(max = 100, message = "Menu icon too long"))]
    pub icon: Option<String>,

    pub parent_id: Option<Uuid>,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GrantPermissionRequest {
    #[validate(length(min = 2, max = 50, message = "Role name must be between 2 and 50 characters"))]
    pub role: String,

    #[serde(default = "default_can_view")]
    pub can_view: bool,
}

fn default_can_view() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_valid_email() {
        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_grant_defaults_to_can_view() {
        let req: GrantPermissionRequest = serde_json::from_str(r#"{"role":"admin"}"#).unwrap();
        assert!(req.can_view);
    }
}
