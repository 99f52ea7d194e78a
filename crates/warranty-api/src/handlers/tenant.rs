// ============================================================================
// Warranty API - Tenant Handler
// File: crates/warranty-api/src/handlers/tenant.rs
// ============================================================================
//! Tenant resolution endpoint

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::dto::TenantContextDto;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TenantParams {
    pub tenant: Option<String>,
}

/// Resolve the active tenant - GET /api/v1/tenant?tenant=<id>
///
/// Replaces the session's tenant context wholesale and re-derives the
/// theme, then returns both so the presentation layer can apply them.
pub async fn resolve_tenant(
    State(state): State<AppState>,
    Query(params): Query<TenantParams>,
) -> Json<ApiResponse<TenantContextDto>> {
    let tenant = state.tenants.resolve(params.tenant.as_deref()).cloned();

    let mut session = state.session.write().await;
    session.activate_tenant(tenant);

    Json(ApiResponse::success(TenantContextDto {
        tenant: session.tenant().cloned(),
        theme: session.theme().clone(),
    }))
}
