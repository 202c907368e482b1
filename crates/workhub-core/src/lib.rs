//! # WorkHub Core
//!
//! Domain entities, services, and repository traits for the WorkHub
//! employee-management application.

pub mod cache;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use error::DomainError;
