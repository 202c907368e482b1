//! Dashboard redirect resolver
//!
//! Picks the single canonical post-login landing route for an employee.

use crate::domain::{routes, Employee, Role};

/// A stored dashboard preference always wins, even when it conflicts with
/// the employee's roles. Otherwise role checks run in strict priority
/// order, falling through to the generic dashboard.
pub fn resolve_dashboard(employee: &Employee, roles: &[Role]) -> String {
    if let Some(preference) = employee.dashboard_route.as_deref() {
        if !preference.trim().is_empty() {
            return preference.to_string();
        }
    }

    for candidate in [Role::Developer, Role::Superadmin, Role::Admin, Role::Employee] {
        if roles.contains(&candidate) {
            if let Some(route) = routes::dashboard_for(&candidate) {
                return route.to_string();
            }
        }
    }

    routes::DASHBOARD_GENERIC.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee::new(
            "bob@example.com".to_string(),
            "Bob".to_string(),
            Some("hash".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_preference_wins_over_roles() {
        let mut emp = employee();
        emp.dashboard_route = Some("custom.route".to_string());
        assert_eq!(
            resolve_dashboard(&emp, &[Role::Developer]),
            "custom.route"
        );
    }

    #[test]
    fn test_blank_preference_is_ignored() {
        let mut emp = employee();
        emp.dashboard_route = Some("   ".to_string());
        assert_eq!(
            resolve_dashboard(&emp, &[Role::Admin]),
            routes::DASHBOARD_ADMIN
        );
    }

    #[test]
    fn test_priority_order() {
        let emp = employee();
        assert_eq!(
            resolve_dashboard(&emp, &[Role::Employee, Role::Developer]),
            routes::DASHBOARD_DEVELOPER
        );
        assert_eq!(
            resolve_dashboard(&emp, &[Role::Admin, Role::Superadmin]),
            routes::DASHBOARD_SUPERADMIN
        );
        assert_eq!(
            resolve_dashboard(&emp, &[Role::Admin]),
            routes::DASHBOARD_ADMIN
        );
    }

    #[test]
    fn test_no_matching_role_falls_back() {
        let emp = employee();
        assert_eq!(
            resolve_dashboard(&emp, &[Role::Supervisor]),
            routes::DASHBOARD_GENERIC
        );
        assert_eq!(resolve_dashboard(&emp, &[]), routes::DASHBOARD_GENERIC);
    }
}
