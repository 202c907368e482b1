//! PostgreSQL repository implementations

pub mod employee_repo_impl;
pub mod menu_permission_repo_impl;
pub mod menu_repo_impl;
pub mod role_repo_impl;

pub use employee_repo_impl::PgEmployeeRepository;
pub use menu_permission_repo_impl::PgMenuPermissionRepository;
pub use menu_repo_impl::PgMenuRepository;
pub use role_repo_impl::PgRoleRepository;
