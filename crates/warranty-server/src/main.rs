use axum::http::HeaderValue;
use axum::routing::{get, post, put};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use warranty_api::handlers::{auth, brands, console, health, tenant};
use warranty_api::middleware::route_gate;
use warranty_api::state::AppState;
use warranty_core::context::SessionContext;
use warranty_core::seed;
use warranty_core::services::{BrandScope, IdentityService, RouteGate, TenantResolver};
use warranty_infrastructure::{
    LocalBrandStore, LocalPrincipalRegistry, LocalSessionStore, LocalStore,
};
use warranty_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    warranty_shared::telemetry::init_telemetry();

    info!("Warranty server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Open the local record store (file-backed when configured)
    let store = Arc::new(match &config.store.path {
        Some(path) => LocalStore::open(path).await,
        None => LocalStore::in_memory(),
    });

    let sessions = Arc::new(LocalSessionStore::new(store.clone()));
    let registry = Arc::new(LocalPrincipalRegistry::new(store.clone()));

    // Built-in demo principals are hashed at startup; plaintext never
    // reaches the store.
    let builtins = seed::builtin_credentials()?;
    let identity = Arc::new(IdentityService::new(
        registry,
        sessions,
        builtins,
        config.session.ttl_hours,
    ));

    // Restore a persisted session; an expired one is purged silently.
    identity.bootstrap().await?;

    // Tenant context: resolve once at startup, replaced per request.
    let tenants = Arc::new(TenantResolver::new(
        seed::demo_tenants(),
        config.runtime_env(),
    ));
    let mut session_ctx = SessionContext::default();
    session_ctx.activate_tenant(tenants.resolve(None).cloned());

    // Brand scope: onboarding data when present, demo set otherwise.
    let brands = BrandScope::load(Arc::new(LocalBrandStore::new(store.clone()))).await?;

    let state = AppState {
        identity,
        tenants,
        brands: Arc::new(RwLock::new(brands)),
        gate: Arc::new(RouteGate::with_console_rules()),
        session: Arc::new(RwLock::new(session_ctx)),
        config: config.clone(),
    };

    // API routes
    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/signup", post(auth::signup))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/tenant", get(tenant::resolve_tenant))
        .route("/api/v1/brands", get(brands::list).post(brands::create))
        .route("/api/v1/brands/active", put(brands::set_active))
        .route("/api/v1/brands/{id}", put(brands::update).delete(brands::remove));

    // Console navigation, gated per attempt
    let console = Router::new().fallback(console::page).layer(
        axum::middleware::from_fn_with_state(state.clone(), route_gate),
    );

    let app = api
        .merge(console)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin("http://localhost:5173".parse::<HeaderValue>()?)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION]),
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
