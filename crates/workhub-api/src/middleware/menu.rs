//! Request-scoped menu injection
//!
//! Resolves the menu for every authenticated request and attaches it to
//! the shared render context. Resolution failures are absorbed upstream
//! (`resolve_or_fallback`); this middleware never fails the request.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde::Serialize;

use workhub_core::domain::MenuNode;

use crate::middleware::auth::CurrentEmployee;
use crate::state::AppState;

/// Shared render context consumed by the front end.
#[derive(Clone, Serialize)]
pub struct NavigationContext {
    pub menu_items: Vec<MenuNode>,
}

pub async fn inject_menu(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(current) = request.extensions().get::<CurrentEmployee>().cloned() {
        let menu_items = state.menu_service.resolve_or_fallback(&current.roles).await;
        request
            .extensions_mut()
            .insert(NavigationContext { menu_items });
    }
    next.run(request).await
}
