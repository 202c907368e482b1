//! Repository traits (ports)

pub mod employee_repository;
pub mod menu_permission_repository;
pub mod menu_repository;
pub mod role_repository;

pub use employee_repository::EmployeeRepository;
pub use menu_permission_repository::MenuPermissionRepository;
pub use menu_repository::MenuRepository;
pub use role_repository::RoleRepository;
