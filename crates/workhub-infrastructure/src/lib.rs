//! # WorkHub Infrastructure
//!
//! Database and cache implementations (adapters).

pub mod cache;
pub mod database;

pub use cache::InMemoryMenuCache;
pub use database::{
    create_pool, PgEmployeeRepository, PgMenuPermissionRepository, PgMenuRepository,
    PgRoleRepository,
};
