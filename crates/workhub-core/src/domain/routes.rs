//! Route table
//!
//! Canonical page routes the web client can navigate to. The dashboard
//! resolver and the menu maintenance command both validate against this
//! table.

use super::role::Role;

pub const DASHBOARD_DEVELOPER: &str = "/developer/dashboard";
pub const DASHBOARD_SUPERADMIN: &str = "/superadmin/dashboard";
pub const DASHBOARD_ADMIN: &str = "/admin/dashboard";
pub const DASHBOARD_EMPLOYEE: &str = "/employee/dashboard";
pub const DASHBOARD_GENERIC: &str = "/dashboard";

const REGISTERED_ROUTES: &[&str] = &[
    DASHBOARD_DEVELOPER,
    DASHBOARD_SUPERADMIN,
    DASHBOARD_ADMIN,
    DASHBOARD_EMPLOYEE,
    DASHBOARD_GENERIC,
    "/employees",
    "/departments",
    "/attendance",
    "/attendance/me",
    "/leave",
    "/leave/me",
    "/reports",
    "/profile",
    "/blog",
    "/settings/menus",
    "/settings/roles",
];

/// Dashboard route for a role, if the role has a dedicated dashboard.
pub fn dashboard_for(role: &Role) -> Option<&'static str> {
    match role {
        Role::Developer => Some(DASHBOARD_DEVELOPER),
        Role::Superadmin => Some(DASHBOARD_SUPERADMIN),
        Role::Admin => Some(DASHBOARD_ADMIN),
        Role::Employee => Some(DASHBOARD_EMPLOYEE),
        Role::Supervisor | Role::Unknown(_) => None,
    }
}

pub fn is_registered(route: &str) -> bool {
    REGISTERED_ROUTES.contains(&route)
}

/// Route generated for a menu item that has none assigned.
pub fn route_for_slug(slug: &str) -> String {
    format!("/{}", slug.trim_matches('/'))
}
