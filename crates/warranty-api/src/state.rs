use std::sync::Arc;

use tokio::sync::RwLock;

use warranty_core::context::SessionContext;
use warranty_core::services::{BrandScope, IdentityService, RouteGate, TenantResolver};
use warranty_infrastructure::{LocalBrandStore, LocalPrincipalRegistry, LocalSessionStore};
use warranty_shared::config::AppConfig;

pub type Identity = IdentityService<LocalPrincipalRegistry, LocalSessionStore>;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<Identity>,
    pub tenants: Arc<TenantResolver>,
    pub brands: Arc<RwLock<BrandScope<LocalBrandStore>>>,
    pub gate: Arc<RouteGate>,
    pub session: Arc<RwLock<SessionContext>>,
    pub config: AppConfig,
}
