// ============================================================================
// WorkHub Core - Menu Resolution Service
// File: crates/workhub-core/src/services/menu_service.rs
// ============================================================================
//! Role-driven menu resolution with caching and write-side tree maintenance.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::{role_set_key, MenuCache};
use crate::domain::{fallback_menu, MenuItem, MenuNode, MenuPermission, Role};
use crate::error::DomainError;
use crate::repositories::{MenuPermissionRepository, MenuRepository};

/// Ancestor-walk bound; anything deeper is treated as a cycle.
const MAX_MENU_DEPTH: usize = 32;

pub struct MenuService {
    menus: Arc<dyn MenuRepository>,
    permissions: Arc<dyn MenuPermissionRepository>,
    cache: Arc<dyn MenuCache>,
}

impl MenuService {
    pub fn new(
        menus: Arc<dyn MenuRepository>,
        permissions: Arc<dyn MenuPermissionRepository>,
        cache: Arc<dyn MenuCache>,
    ) -> Self {
        Self {
            menus,
            permissions,
            cache,
        }
    }

    /// Resolve the visible menu tree for a role set.
    ///
    /// An empty role set resolves to an empty tree without touching
    /// storage. Results are cached per normalized role set.
    pub async fn resolve(&self, roles: &[Role]) -> Result<Vec<MenuNode>, DomainError> {
        let roles = normalize(roles);
        if roles.is_empty() {
            return Ok(Vec::new());
        }

        let key = role_set_key(&roles);
        if let Some(tree) = self.cache.get(&key) {
            debug!("Menu cache hit for role set {}", key);
            return Ok(tree);
        }

        let items = self.menus.list_active().await?;
        let grants = self.permissions.list_active().await?;
        let tree = build_tree(&items, &grants, &roles);

        debug!(
            "Resolved {} top-level menu items for role set {}",
            tree.len(),
            key
        );
        self.cache.set(&key, tree.clone());
        Ok(tree)
    }

    /// Resolve, substituting the static fallback menu for the primary role
    /// when resolution fails. Never returns an error; the render path must
    /// always receive a usable menu.
    pub async fn resolve_or_fallback(&self, roles: &[Role]) -> Vec<MenuNode> {
        match self.resolve(roles).await {
            Ok(tree) => tree,
            Err(e) => {
                warn!("Menu resolution failed, serving fallback menu: {}", e);
                roles.first().map(fallback_menu).unwrap_or_default()
            }
        }
    }

    pub fn clear_cache(&self) {
        info!("Clearing resolved-menu cache");
        self.cache.invalidate_all();
    }

    /// All non-deleted items, for administration and maintenance tooling.
    pub async fn list_items(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.menus.list_all().await
    }

    pub async fn get_item(&self, id: &Uuid) -> Result<MenuItem, DomainError> {
        self.menus
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(*id))
    }

    pub async fn create_item(&self, item: MenuItem) -> Result<MenuItem, DomainError> {
        self.ensure_valid_parent(item.id, item.parent_id).await?;
        let created = self.menus.create(&item).await?;
        self.cache.invalidate_all();
        Ok(created)
    }

    pub async fn update_item(&self, item: MenuItem) -> Result<MenuItem, DomainError> {
        self.ensure_valid_parent(item.id, item.parent_id).await?;
        let updated = self.menus.update(&item).await?;
        self.cache.invalidate_all();
        Ok(updated)
    }

    pub async fn delete_item(&self, id: &Uuid) -> Result<(), DomainError> {
        self.menus.soft_delete(id).await?;
        self.cache.invalidate_all();
        Ok(())
    }

    /// Grants recorded for one menu item, for permission administration.
    pub async fn item_grants(
        &self,
        menu_item_id: &Uuid,
    ) -> Result<Vec<MenuPermission>, DomainError> {
        self.menus
            .find_by_id(menu_item_id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(*menu_item_id))?;
        self.permissions.grants_for_item(menu_item_id).await
    }

    pub async fn grant(
        &self,
        role: Role,
        menu_item_id: Uuid,
        can_view: bool,
        granted_by: Option<Uuid>,
    ) -> Result<MenuPermission, DomainError> {
        self.menus
            .find_by_id(&menu_item_id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(menu_item_id))?;

        let grant = MenuPermission::new(role, menu_item_id, can_view, granted_by);
        let stored = self.permissions.upsert(&grant).await?;
        self.cache.invalidate_all();
        Ok(stored)
    }

    pub async fn revoke(&self, role: &Role, menu_item_id: &Uuid) -> Result<(), DomainError> {
        self.permissions.revoke(role, menu_item_id).await?;
        self.cache.invalidate_all();
        Ok(())
    }

    /// Reject a parent assignment that is missing or would create a cycle.
    async fn ensure_valid_parent(
        &self,
        item_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> Result<(), DomainError> {
        let Some(first) = parent_id else {
            return Ok(());
        };

        let mut current = first;
        for _ in 0..MAX_MENU_DEPTH {
            if current == item_id {
                return Err(DomainError::MenuCycle(item_id));
            }
            let ancestor = self
                .menus
                .find_by_id(&current)
                .await?
                .ok_or(DomainError::MenuItemNotFound(current))?;
            match ancestor.parent_id {
                Some(next) => current = next,
                None => return Ok(()),
            }
        }
        Err(DomainError::MenuCycle(item_id))
    }
}

fn normalize(roles: &[Role]) -> Vec<Role> {
    let mut out: Vec<Role> = Vec::with_capacity(roles.len());
    for role in roles {
        if !out.contains(role) {
            out.push(role.clone());
        }
    }
    out
}

/// Build the pruned tree from the flat item list. Items with a missing or
/// inactive parent never appear; an invisible item takes its subtree with
/// it.
fn build_tree(items: &[MenuItem], grants: &[MenuPermission], roles: &[Role]) -> Vec<MenuNode> {
    let mut grants_by_item: HashMap<Uuid, Vec<&MenuPermission>> = HashMap::new();
    for grant in grants {
        grants_by_item.entry(grant.menu_item_id).or_default().push(grant);
    }

    let mut children_of: HashMap<Option<Uuid>, Vec<usize>> = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        children_of.entry(item.parent_id).or_default().push(idx);
    }
    for indices in children_of.values_mut() {
        indices.sort_by(|&a, &b| {
            (items[a].sort_order, &items[a].name).cmp(&(items[b].sort_order, &items[b].name))
        });
    }

    build_nodes(None, items, &children_of, &grants_by_item, roles)
}

fn build_nodes(
    parent: Option<Uuid>,
    items: &[MenuItem],
    children_of: &HashMap<Option<Uuid>, Vec<usize>>,
    grants_by_item: &HashMap<Uuid, Vec<&MenuPermission>>,
    roles: &[Role],
) -> Vec<MenuNode> {
    let Some(indices) = children_of.get(&parent) else {
        return Vec::new();
    };

    let mut nodes = Vec::new();
    for &idx in indices {
        let item = &items[idx];
        if !item_visible(item, grants_by_item, roles) {
            continue;
        }
        let children = build_nodes(Some(item.id), items, children_of, grants_by_item, roles);
        nodes.push(MenuNode::from_item(item, children));
    }
    nodes
}

/// Visibility rule: a granted item needs at least one `can_view` grant for
/// a role in the set; an item with no grants at all is visible to everyone
/// (default-allow).
fn item_visible(
    item: &MenuItem,
    grants_by_item: &HashMap<Uuid, Vec<&MenuPermission>>,
    roles: &[Role],
) -> bool {
    match grants_by_item.get(&item.id) {
        None => true,
        Some(grants) => grants.iter().any(|g| g.grants_view_to(roles)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::menu_permission_repository::MockMenuPermissionRepository;
    use crate::repositories::menu_repository::MockMenuRepository;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct TestCache {
        entries: Mutex<HashMap<String, Vec<MenuNode>>>,
    }

    impl MenuCache for TestCache {
        fn get(&self, key: &str) -> Option<Vec<MenuNode>> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, tree: Vec<MenuNode>) {
            self.entries.lock().unwrap().insert(key.to_string(), tree);
        }

        fn invalidate(&self, key: &str) {
            self.entries.lock().unwrap().remove(key);
        }

        fn invalidate_all(&self) {
            self.entries.lock().unwrap().clear();
        }
    }

    fn item(name: &str, slug: &str, parent_id: Option<Uuid>, sort_order: i32) -> MenuItem {
        MenuItem::new(
            name.to_string(),
            slug.to_string(),
            Some(format!("/{}", slug)),
            None,
            parent_id,
            sort_order,
            None,
        )
        .unwrap()
    }

    fn view_grant(role: Role, menu_item_id: Uuid) -> MenuPermission {
        MenuPermission::new(role, menu_item_id, true, None)
    }

    struct Fixture {
        items: Vec<MenuItem>,
        grants: Vec<MenuPermission>,
    }

    /// hr (admin) -> staff (admin), payroll (superadmin only)
    /// reports: no grants at all (default-allow)
    fn fixture() -> Fixture {
        let hr = item("Human Resources", "hr", None, 1);
        let staff = item("Staff", "staff", Some(hr.id), 1);
        let payroll = item("Payroll", "payroll", Some(hr.id), 2);
        let reports = item("Reports", "reports", None, 2);

        let grants = vec![
            view_grant(Role::Admin, hr.id),
            view_grant(Role::Superadmin, hr.id),
            view_grant(Role::Admin, staff.id),
            view_grant(Role::Superadmin, staff.id),
            view_grant(Role::Superadmin, payroll.id),
        ];

        Fixture {
            items: vec![hr, staff, payroll, reports],
            grants,
        }
    }

    fn service(
        menus: MockMenuRepository,
        permissions: MockMenuPermissionRepository,
    ) -> MenuService {
        MenuService::new(
            Arc::new(menus),
            Arc::new(permissions),
            Arc::new(TestCache::default()),
        )
    }

    fn service_for(fixture: &Fixture, expected_loads: usize) -> MenuService {
        let items = fixture.items.clone();
        let grants = fixture.grants.clone();
        let mut menus = MockMenuRepository::new();
        menus
            .expect_list_active()
            .times(expected_loads)
            .returning(move || Ok(items.clone()));
        let mut permissions = MockMenuPermissionRepository::new();
        permissions
            .expect_list_active()
            .times(expected_loads)
            .returning(move || Ok(grants.clone()));
        service(menus, permissions)
    }

    #[tokio::test]
    async fn test_pruning_is_recursive() {
        let fixture = fixture();
        let svc = service_for(&fixture, 1);

        let tree = svc.resolve(&[Role::Admin]).await.unwrap();
        let hr = tree.iter().find(|n| n.slug == "hr").unwrap();
        // payroll is granted to superadmin only and is pruned with its slot
        assert_eq!(hr.children.len(), 1);
        assert_eq!(hr.children[0].slug, "staff");
        assert!(hr.has_children);
    }

    #[tokio::test]
    async fn test_invisible_item_dropped_entirely() {
        let fixture = fixture();
        let svc = service_for(&fixture, 1);

        let tree = svc.resolve(&[Role::Employee]).await.unwrap();
        // hr has grants and none match employee, so the whole subtree is gone
        assert!(tree.iter().all(|n| n.slug != "hr"));
        assert!(tree.iter().all(|n| n.slug != "staff"));
    }

    #[tokio::test]
    async fn test_more_roles_is_a_superset() {
        let fixture = fixture();
        let svc = service_for(&fixture, 2);

        let admin_only = svc.resolve(&[Role::Admin]).await.unwrap();
        let both = svc.resolve(&[Role::Admin, Role::Superadmin]).await.unwrap();

        let admin_ids = crate::domain::visible_ids(&admin_only);
        let both_ids = crate::domain::visible_ids(&both);
        for id in &admin_ids {
            assert!(both_ids.contains(id), "{} hidden by adding a role", id);
        }
        assert!(both_ids.len() > admin_ids.len());
    }

    #[tokio::test]
    async fn test_empty_role_set_short_circuits() {
        // No expectations set: any repository call would panic the test.
        let svc = service(MockMenuRepository::new(), MockMenuPermissionRepository::new());
        assert!(svc.resolve(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_grantless_item_visible_to_all() {
        let fixture = fixture();
        let svc = service_for(&fixture, 2);

        for roles in [vec![Role::Employee], vec![Role::from_name("editor")]] {
            let tree = svc.resolve(&roles).await.unwrap();
            assert!(
                tree.iter().any(|n| n.slug == "reports"),
                "grantless item hidden from {:?}",
                roles
            );
        }
    }

    #[tokio::test]
    async fn test_cache_hit_skips_recomputation() {
        let fixture = fixture();
        // times(1) on the mocks: a second repository load would fail.
        let svc = service_for(&fixture, 1);

        let first = svc.resolve(&[Role::Admin]).await.unwrap();
        let second = svc.resolve(&[Role::Admin]).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_recomputation() {
        let fixture = fixture();
        let svc = service_for(&fixture, 2);

        svc.resolve(&[Role::Admin]).await.unwrap();
        svc.clear_cache();
        svc.resolve(&[Role::Admin]).await.unwrap();
    }

    #[tokio::test]
    async fn test_role_order_shares_cache_entry() {
        let fixture = fixture();
        let svc = service_for(&fixture, 1);

        svc.resolve(&[Role::Admin, Role::Employee]).await.unwrap();
        svc.resolve(&[Role::Employee, Role::Admin]).await.unwrap();
    }

    #[tokio::test]
    async fn test_orphaned_child_unreachable() {
        let parent = item("Hidden Parent", "hidden", None, 1);
        let child = item("Orphan", "orphan", Some(parent.id), 1);
        // parent is not in the active list
        let items = vec![child];
        let mut menus = MockMenuRepository::new();
        menus
            .expect_list_active()
            .returning(move || Ok(items.clone()));
        let mut permissions = MockMenuPermissionRepository::new();
        permissions.expect_list_active().returning(|| Ok(Vec::new()));

        let svc = service(menus, permissions);
        assert!(svc.resolve(&[Role::Admin]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resolution_failure_serves_fallback() {
        let mut menus = MockMenuRepository::new();
        menus
            .expect_list_active()
            .returning(|| Err(DomainError::DatabaseError("connection refused".into())));
        let mut permissions = MockMenuPermissionRepository::new();
        permissions.expect_list_active().returning(|| Ok(Vec::new()));

        let svc = service(menus, permissions);
        let menu = svc.resolve_or_fallback(&[Role::Admin, Role::Employee]).await;
        assert!(!menu.is_empty());
        assert_eq!(menu[0].slug, "dashboard");
    }

    #[tokio::test]
    async fn test_fallback_for_unknown_role_is_empty() {
        let mut menus = MockMenuRepository::new();
        menus
            .expect_list_active()
            .returning(|| Err(DomainError::DatabaseError("boom".into())));
        let mut permissions = MockMenuPermissionRepository::new();
        permissions.expect_list_active().returning(|| Ok(Vec::new()));

        let svc = service(menus, permissions);
        assert!(svc
            .resolve_or_fallback(&[Role::from_name("editor")])
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_cycle_rejected_on_update() {
        // a -> b, then try to reparent a under b
        let mut a = item("Section A", "section-a", None, 1);
        let b = item("Section B", "section-b", Some(a.id), 1);

        let lookup: HashMap<Uuid, MenuItem> =
            [(a.id, a.clone()), (b.id, b.clone())].into_iter().collect();
        let mut menus = MockMenuRepository::new();
        menus
            .expect_find_by_id()
            .returning(move |id| Ok(lookup.get(id).cloned()));
        let permissions = MockMenuPermissionRepository::new();

        a.parent_id = Some(b.id);
        let svc = service(menus, permissions);
        assert!(matches!(
            svc.update_item(a).await,
            Err(DomainError::MenuCycle(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_parent_rejected_on_create() {
        let orphan = item("Orphan", "orphan", Some(Uuid::new_v4()), 1);
        let mut menus = MockMenuRepository::new();
        menus.expect_find_by_id().returning(|_| Ok(None));
        let permissions = MockMenuPermissionRepository::new();

        let svc = service(menus, permissions);
        assert!(matches!(
            svc.create_item(orphan).await,
            Err(DomainError::MenuItemNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_item_grants_lists_grants_for_item() {
        let fixture = fixture();
        let hr = fixture.items[0].clone();
        let hr_id = hr.id;
        let hr_grants: Vec<MenuPermission> = fixture
            .grants
            .iter()
            .filter(|g| g.menu_item_id == hr_id)
            .cloned()
            .collect();

        let mut menus = MockMenuRepository::new();
        menus
            .expect_find_by_id()
            .returning(move |_| Ok(Some(hr.clone())));
        let mut permissions = MockMenuPermissionRepository::new();
        let returned = hr_grants.clone();
        permissions
            .expect_grants_for_item()
            .returning(move |_| Ok(returned.clone()));

        let svc = service(menus, permissions);
        let grants = svc.item_grants(&hr_id).await.unwrap();
        assert_eq!(grants.len(), hr_grants.len());
        assert!(grants.iter().all(|g| g.menu_item_id == hr_id));
    }

    #[tokio::test]
    async fn test_item_grants_missing_item() {
        let mut menus = MockMenuRepository::new();
        menus.expect_find_by_id().returning(|_| Ok(None));

        let svc = service(menus, MockMenuPermissionRepository::new());
        assert!(matches!(
            svc.item_grants(&Uuid::new_v4()).await,
            Err(DomainError::MenuItemNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_mutations_invalidate_cache() {
        let fixture = fixture();
        let items = fixture.items.clone();
        let grants = fixture.grants.clone();
        let target = fixture.items[3].clone(); // reports, a root item

        let mut menus = MockMenuRepository::new();
        menus
            .expect_list_active()
            .times(2)
            .returning(move || Ok(items.clone()));
        menus
            .expect_find_by_id()
            .returning(move |_| Ok(Some(target.clone())));
        let mut permissions = MockMenuPermissionRepository::new();
        permissions
            .expect_list_active()
            .times(2)
            .returning(move || Ok(grants.clone()));
        permissions
            .expect_upsert()
            .returning(|g| Ok(g.clone()));

        let svc = service(menus, permissions);
        svc.resolve(&[Role::Admin]).await.unwrap();
        svc.grant(Role::Employee, fixture.items[3].id, true, None)
            .await
            .unwrap();
        // grant cleared the cache, so this recomputes (times(2) above)
        svc.resolve(&[Role::Admin]).await.unwrap();
    }
}
