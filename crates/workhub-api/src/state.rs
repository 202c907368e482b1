use std::sync::Arc;

use workhub_core::repositories::EmployeeRepository;
use workhub_core::services::{AuthService, MenuService};
use workhub_security::JwtService;
use workhub_shared::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<MenuService>,
    pub auth_service: Arc<AuthService>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub jwt: Arc<JwtService>,
    pub config: AppConfig,
}
