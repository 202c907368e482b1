// ============================================================================
// WorkHub Core - Authentication Service
// File: crates/workhub-core/src/services/auth_service.rs
// ============================================================================
//! Login flow: credential check, token pair, post-login redirect.

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use workhub_shared::utils::mask_email;

use crate::domain::{Employee, Role};
use crate::error::DomainError;
use crate::repositories::EmployeeRepository;
use crate::services::dashboard_service;

pub struct AuthService {
    employees: Arc<dyn EmployeeRepository>,
    jwt_secret: String,
    jwt_access_expiry_secs: i64,
    jwt_refresh_expiry_secs: i64,
}

impl AuthService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        jwt_secret: String,
        jwt_access_expiry_secs: i64,
        jwt_refresh_expiry_secs: i64,
    ) -> Self {
        Self {
            employees,
            jwt_secret,
            jwt_access_expiry_secs,
            jwt_refresh_expiry_secs,
        }
    }

    /// Login with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, DomainError> {
        info!("Login attempt for {}", mask_email(email));

        let employee = self
            .employees
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: email not found: {}", mask_email(email));
                DomainError::InvalidCredentials
            })?;

        if !employee.can_login() {
            warn!("Login failed: account not active: {}", mask_email(email));
            return Err(DomainError::EmployeeNotActive);
        }

        let stored_hash = employee
            .password_hash
            .as_ref()
            .ok_or(DomainError::InvalidCredentials)?;

        let password_valid =
            workhub_security::password::PasswordService::verify(password, stored_hash)
                .map_err(|_e| DomainError::InvalidCredentials)?;

        if !password_valid {
            warn!("Login failed: invalid password for {}", mask_email(email));
            return Err(DomainError::InvalidCredentials);
        }

        let jwt_service = workhub_security::jwt::JwtService::new(
            self.jwt_secret.clone(),
            self.jwt_access_expiry_secs,
            self.jwt_refresh_expiry_secs,
        );

        let access_token = jwt_service
            .generate_access_token(&employee.id)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        let refresh_token = jwt_service
            .generate_refresh_token(&employee.id)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        let assignments = self.employees.role_names(&employee.id).await?;
        let roles = employee.effective_roles(&assignments);
        let redirect = dashboard_service::resolve_dashboard(&employee, &roles);

        let mut updated = employee.clone();
        updated.record_login();
        if let Err(e) = self.employees.update(&updated).await {
            // Do not fail login over the last-login stamp.
            error!("Failed to record last login: {}", e);
        }

        info!("Login successful for {}", mask_email(email));

        Ok(LoginResult {
            employee: EmployeeInfo::from(&updated),
            roles,
            access_token,
            refresh_token,
            redirect,
        })
    }
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub employee: EmployeeInfo,
    pub roles: Vec<Role>,
    pub access_token: String,
    pub refresh_token: String,
    pub redirect: String,
}

/// Employee info returned in auth responses
#[derive(Debug, Clone)]
pub struct EmployeeInfo {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
}

impl From<&Employee> for EmployeeInfo {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            display_name: employee.display_name.clone(),
            email: employee.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routes;
    use crate::repositories::employee_repository::MockEmployeeRepository;
    use workhub_security::password::PasswordService;

    fn employee_with_password(password: &str) -> Employee {
        let hash = PasswordService::hash(password).unwrap();
        Employee::new(
            "carol@example.com".to_string(),
            "Carol".to_string(),
            Some(hash),
        )
        .unwrap()
    }

    fn service(employees: MockEmployeeRepository) -> AuthService {
        AuthService::new(Arc::new(employees), "test-secret".to_string(), 900, 604800)
    }

    #[tokio::test]
    async fn test_login_success_redirects_by_role() {
        let emp = employee_with_password("s3cret-pass");
        let found = emp.clone();

        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_find_by_email()
            .returning(move |_| Ok(Some(found.clone())));
        employees
            .expect_role_names()
            .returning(|_| Ok(vec!["admin".to_string()]));
        employees.expect_update().returning(|e| Ok(e.clone()));

        let result = service(employees).login("carol@example.com", "s3cret-pass").await;
        let result = result.unwrap();
        assert_eq!(result.redirect, routes::DASHBOARD_ADMIN);
        assert_eq!(result.roles, vec![Role::Admin]);
        assert!(!result.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let emp = employee_with_password("right-password");
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_find_by_email()
            .returning(move |_| Ok(Some(emp.clone())));

        let result = service(employees).login("carol@example.com", "wrong").await;
        assert!(matches!(result, Err(DomainError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_find_by_email().returning(|_| Ok(None));

        let result = service(employees).login("nobody@example.com", "pw").await;
        assert!(matches!(result, Err(DomainError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_inactive_account() {
        let mut emp = employee_with_password("pw");
        emp.is_active = false;
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_find_by_email()
            .returning(move |_| Ok(Some(emp.clone())));

        let result = service(employees).login("carol@example.com", "pw").await;
        assert!(matches!(result, Err(DomainError::EmployeeNotActive)));
    }
}
