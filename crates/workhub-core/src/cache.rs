//! Resolved-menu cache port
//!
//! The cache is an injected dependency of the menu service, never ambient
//! state. Implementations may expire entries on their own TTL; callers
//! invalidate explicitly on menu or permission mutation.

use crate::domain::{MenuNode, Role};

pub trait MenuCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<MenuNode>>;
    fn set(&self, key: &str, tree: Vec<MenuNode>);
    fn invalidate(&self, key: &str);
    fn invalidate_all(&self);
}

/// Cache key for a role set: sorted, deduplicated role names joined with
/// `|`, so `{admin, employee}` and `{employee, admin}` share one entry.
pub fn role_set_key(roles: &[Role]) -> String {
    let mut names: Vec<&str> = roles.iter().map(Role::as_name).collect();
    names.sort_unstable();
    names.dedup();
    names.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_set_key_is_order_independent() {
        let a = role_set_key(&[Role::Admin, Role::Employee]);
        let b = role_set_key(&[Role::Employee, Role::Admin, Role::Employee]);
        assert_eq!(a, b);
        assert_eq!(a, "admin|employee");
    }

    #[test]
    fn test_empty_role_set_key() {
        assert_eq!(role_set_key(&[]), "");
    }
}
