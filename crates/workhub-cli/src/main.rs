use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

use workhub_core::domain::{routes, MenuItem, MenuNode, Role};
use workhub_core::repositories::{
    MenuPermissionRepository, MenuRepository, RoleRepository,
};
use workhub_core::services::MenuService;
use workhub_infrastructure::{
    create_pool, InMemoryMenuCache, PgMenuPermissionRepository, PgMenuRepository,
    PgRoleRepository,
};
use workhub_shared::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "workhub-menu",
    version,
    about = "WorkHub - Menu maintenance CLI"
)]
struct Args {
    /// Generate missing menu routes and validate existing ones
    #[arg(long)]
    sync: bool,

    /// Print the resolved menu tree for every known role
    #[arg(long)]
    show: bool,

    /// Invalidate the resolved-menu cache
    #[arg(long)]
    clear: bool,
}

/// What `--sync` should do with one menu item.
#[derive(Debug, PartialEq)]
enum SyncAction {
    /// Item has no route; persist the generated one.
    Generate(String),
    /// Existing route is present in the route table.
    Valid,
    /// Existing route is unknown to the route table.
    Unregistered(String),
}

fn sync_action(item: &MenuItem) -> SyncAction {
    match item.route.as_deref() {
        None | Some("") => SyncAction::Generate(routes::route_for_slug(&item.slug)),
        Some(route) if routes::is_registered(route) => SyncAction::Valid,
        Some(route) => SyncAction::Unregistered(route.to_string()),
    }
}

#[derive(Debug, Default, PartialEq)]
struct MenuCounts {
    total: usize,
    active: usize,
    routed: usize,
    unrouted: usize,
}

fn menu_counts(items: &[MenuItem]) -> MenuCounts {
    let mut counts = MenuCounts {
        total: items.len(),
        ..MenuCounts::default()
    };
    for item in items {
        if item.is_active {
            counts.active += 1;
        }
        match item.route.as_deref() {
            None | Some("") => counts.unrouted += 1,
            Some(_) => counts.routed += 1,
        }
    }
    counts
}

fn render_tree(nodes: &[MenuNode], depth: usize, out: &mut String) {
    for node in nodes {
        let route = node.route.as_deref().unwrap_or("-");
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{} [{}] {}\n", node.name, node.slug, route));
        render_tree(&node.children, depth + 1, out);
    }
}

async fn run_sync(service: &MenuService, menus: &Arc<dyn MenuRepository>) -> Result<()> {
    let items = service.list_items().await?;
    let mut generated = 0usize;
    let mut valid = 0usize;
    let mut warnings = 0usize;

    for item in &items {
        match sync_action(item) {
            SyncAction::Generate(route) => match menus.set_route(&item.id, &route).await {
                Ok(()) => {
                    info!("{}: generated route {}", item.slug, route);
                    generated += 1;
                }
                Err(e) => {
                    warn!("{}: failed to persist generated route: {}", item.slug, e);
                    warnings += 1;
                }
            },
            SyncAction::Valid => valid += 1,
            SyncAction::Unregistered(route) => {
                warn!("{}: route {} is not registered", item.slug, route);
                warnings += 1;
            }
        }
    }

    // set_route bypasses the service mutations, so drop the cache here.
    if generated > 0 {
        service.clear_cache();
    }

    println!(
        "sync: {} items, {} generated, {} valid, {} warnings",
        items.len(),
        generated,
        valid,
        warnings
    );
    Ok(())
}

async fn run_show(service: &MenuService) -> Result<()> {
    for role in Role::known() {
        let tree = service.resolve(&[role.clone()]).await?;
        let mut out = String::new();
        render_tree(&tree, 1, &mut out);
        println!("{} ({} top-level items)\n{}", role, tree.len(), out);
    }
    Ok(())
}

async fn run_counts(
    service: &MenuService,
    roles: &PgRoleRepository,
    permissions: &Arc<dyn MenuPermissionRepository>,
) -> Result<()> {
    let items = service.list_items().await?;
    let counts = menu_counts(&items);
    let role_count = roles.count().await?;
    let grant_count = permissions.count().await?;

    println!("menu items : {} total, {} active", counts.total, counts.active);
    println!("routes     : {} routed, {} unrouted", counts.routed, counts.unrouted);
    println!("roles      : {}", role_count);
    println!("permissions: {}", grant_count);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    info!("WorkHub menu maintenance");

    let config = AppConfig::load()?;
    let pool = create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;

    let menus: Arc<dyn MenuRepository> = Arc::new(PgMenuRepository::new(pool.clone()));
    let permissions: Arc<dyn MenuPermissionRepository> =
        Arc::new(PgMenuPermissionRepository::new(pool.clone()));
    let roles = PgRoleRepository::new(pool.clone());
    let cache = Arc::new(InMemoryMenuCache::new(Duration::from_secs(
        config.menu.cache_ttl_seconds,
    )));
    let service = MenuService::new(menus.clone(), permissions.clone(), cache);

    if args.sync {
        run_sync(&service, &menus).await?;
    }
    if args.show {
        run_show(&service).await?;
    }
    if args.clear {
        // The cache is per-process; server processes rebuild entries on TTL
        // expiry or via the admin clear endpoint.
        service.clear_cache();
        println!("cache cleared for this process");
    }
    if !args.sync && !args.show && !args.clear {
        run_counts(&service, &roles, &permissions).await?;
    }

    Ok(())
}
