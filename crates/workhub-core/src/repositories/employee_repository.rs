//! Employee repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Employee;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Employee>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError>;
    /// Role names assigned to the employee via the identity subsystem's
    /// many-to-many join; empty when none are assigned.
    async fn role_names(&self, employee_id: &Uuid) -> Result<Vec<String>, DomainError>;
    async fn update(&self, employee: &Employee) -> Result<Employee, DomainError>;
}
