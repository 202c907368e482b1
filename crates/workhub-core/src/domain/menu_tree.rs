//! Resolved menu tree node (derived, not persisted)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::menu_item::MenuItem;

/// A node of the role-specific pruned menu tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub route: Option<String>,
    pub icon: Option<String>,
    pub parent_id: Option<Uuid>,
    pub sort_order: i32,
    pub children: Vec<MenuNode>,
    pub has_children: bool,
}

impl MenuNode {
    pub fn from_item(item: &MenuItem, children: Vec<MenuNode>) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            slug: item.slug.clone(),
            route: item.route.clone(),
            icon: item.icon.clone(),
            parent_id: item.parent_id,
            sort_order: item.sort_order,
            has_children: !children.is_empty(),
            children,
        }
    }

    /// Leaf constructor for hardcoded fallback tables.
    pub fn leaf(name: &str, slug: &str, route: &str, icon: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug.to_string(),
            route: Some(route.to_string()),
            icon: icon.map(|i| i.to_string()),
            parent_id: None,
            sort_order: 0,
            children: Vec::new(),
            has_children: false,
        }
    }
}

/// Flatten the ids of every node in `nodes`, depth first.
pub fn visible_ids(nodes: &[MenuNode]) -> Vec<Uuid> {
    let mut ids = Vec::new();
    collect_ids(nodes, &mut ids);
    ids
}

fn collect_ids(nodes: &[MenuNode], out: &mut Vec<Uuid>) {
    for node in nodes {
        out.push(node.id);
        collect_ids(&node.children, out);
    }
}
