use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use workhub_api::handlers::{auth, dashboard, health, menu};
use workhub_api::middleware::{inject_menu, require_auth, require_role};
use workhub_api::state::AppState;
use workhub_core::cache::MenuCache;
use workhub_core::domain::Role;
use workhub_core::repositories::{EmployeeRepository, MenuPermissionRepository, MenuRepository};
use workhub_core::services::{AuthService, MenuService};
use workhub_infrastructure::database::connection;
use workhub_infrastructure::{
    InMemoryMenuCache, PgEmployeeRepository, PgMenuPermissionRepository, PgMenuRepository,
};
use workhub_security::JwtService;
use workhub_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    workhub_shared::telemetry::init_telemetry();

    info!("WorkHub Server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Database connection established.");

    // Repositories and cache (cache is injected, never ambient)
    let employees: Arc<dyn EmployeeRepository> = Arc::new(PgEmployeeRepository::new(pool.clone()));
    let menus: Arc<dyn MenuRepository> = Arc::new(PgMenuRepository::new(pool.clone()));
    let permissions: Arc<dyn MenuPermissionRepository> =
        Arc::new(PgMenuPermissionRepository::new(pool.clone()));
    let cache: Arc<dyn MenuCache> = Arc::new(InMemoryMenuCache::new(Duration::from_secs(
        config.menu.cache_ttl_seconds,
    )));

    // Services
    let menu_service = Arc::new(MenuService::new(menus, permissions, cache));
    let auth_service = Arc::new(AuthService::new(
        employees.clone(),
        config.auth.jwt_secret.clone(),
        config.auth.access_token_expiry,
        config.auth.refresh_token_expiry,
    ));
    let jwt = Arc::new(JwtService::new(
        config.auth.jwt_secret.clone(),
        config.auth.access_token_expiry,
        config.auth.refresh_token_expiry,
    ));

    // Create App State
    let state = AppState {
        menu_service,
        auth_service,
        employees,
        jwt,
        config: config.clone(),
    };

    // Admin subtree, gated on the admin role via the covered-roles check
    let admin_routes = Router::new()
        .route("/menus", get(menu::list_items).post(menu::create_item))
        .route("/menus/{id}", put(menu::update_item).delete(menu::delete_item))
        .route(
            "/menus/{id}/permissions",
            get(menu::list_permissions).post(menu::grant_permission),
        )
        .route(
            "/menus/{id}/permissions/{role}",
            delete(menu::revoke_permission),
        )
        .route("/menus/cache/clear", post(menu::clear_cache))
        .layer(middleware::from_fn(|req, next| {
            require_role(Role::Admin, req, next)
        }));

    // Authenticated routes: auth first, then menu injection (layers run
    // outermost-last)
    let protected = Router::new()
        .route("/menu", get(menu::my_menu))
        .route("/dashboard", get(dashboard::resolve))
        .nest("/admin", admin_routes)
        .layer(middleware::from_fn_with_state(state.clone(), inject_menu))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let api = Router::new()
        .route("/auth/login", post(auth::login))
        .merge(protected);

    // Build router
    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin("http://localhost:5173".parse::<axum::http::HeaderValue>()?)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                ]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
