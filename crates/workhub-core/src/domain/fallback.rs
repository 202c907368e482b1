//! Static fallback menu table
//!
//! Served when dynamic resolution fails so navigation never disappears.
//! Keyed by the user's primary role; unknown roles get an empty menu.

use super::menu_tree::MenuNode;
use super::role::Role;
use super::routes;

pub fn fallback_menu(role: &Role) -> Vec<MenuNode> {
    match role {
        Role::Developer | Role::Superadmin => superadmin_menu(),
        Role::Admin => admin_menu(),
        Role::Supervisor | Role::Employee => employee_menu(),
        Role::Unknown(_) => Vec::new(),
    }
}

fn superadmin_menu() -> Vec<MenuNode> {
    let mut settings = MenuNode::leaf("Settings", "settings", "/settings/menus", Some("cog"));
    settings.children = vec![
        MenuNode::leaf("Menus", "menus", "/settings/menus", None),
        MenuNode::leaf("Roles", "roles", "/settings/roles", None),
    ];
    settings.has_children = true;
    vec![
        MenuNode::leaf(
            "Dashboard",
            "dashboard",
            routes::DASHBOARD_SUPERADMIN,
            Some("home"),
        ),
        MenuNode::leaf("Employees", "employees", "/employees", Some("users")),
        MenuNode::leaf(
            "Departments",
            "departments",
            "/departments",
            Some("building"),
        ),
        MenuNode::leaf("Reports", "reports", "/reports", Some("chart")),
        settings,
    ]
}

fn admin_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::leaf("Dashboard", "dashboard", routes::DASHBOARD_ADMIN, Some("home")),
        MenuNode::leaf("Employees", "employees", "/employees", Some("users")),
        MenuNode::leaf("Attendance", "attendance", "/attendance", Some("clock")),
        MenuNode::leaf("Leave", "leave", "/leave", Some("calendar")),
    ]
}

fn employee_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::leaf(
            "Dashboard",
            "dashboard",
            routes::DASHBOARD_EMPLOYEE,
            Some("home"),
        ),
        MenuNode::leaf(
            "My Attendance",
            "my-attendance",
            "/attendance/me",
            Some("clock"),
        ),
        MenuNode::leaf("My Leave", "my-leave", "/leave/me", Some("calendar")),
        MenuNode::leaf("Profile", "profile", "/profile", Some("user")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_get_a_menu() {
        for role in Role::known() {
            assert!(!fallback_menu(&role).is_empty(), "empty menu for {}", role);
        }
    }

    #[test]
    fn test_unknown_role_gets_empty_menu() {
        assert!(fallback_menu(&Role::from_name("editor")).is_empty());
    }

    #[test]
    fn test_superadmin_menu_has_settings_children() {
        let menu = superadmin_menu();
        let settings = menu.iter().find(|n| n.slug == "settings").unwrap();
        assert!(settings.has_children);
        assert_eq!(settings.children.len(), 2);
    }
}
