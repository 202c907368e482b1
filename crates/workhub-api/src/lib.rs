//! # WorkHub API
//!
//! HTTP handlers, middleware, and response types.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
