//! # WorkHub Core - Domain Module
//!
//! Domain entities for the employee-management application.

pub mod employee;
pub mod fallback;
pub mod menu_item;
pub mod menu_permission;
pub mod menu_tree;
pub mod role;
pub mod routes;

// Re-export all entities and enums
pub use employee::Employee;
pub use fallback::fallback_menu;
pub use menu_item::MenuItem;
pub use menu_permission::MenuPermission;
pub use menu_tree::{visible_ids, MenuNode};
pub use role::{Role, RoleRecord};
