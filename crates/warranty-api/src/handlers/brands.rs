// ============================================================================
// Warranty API - Brand Handlers
// File: crates/warranty-api/src/handlers/brands.rs
// ============================================================================
//! Brand collection endpoints, visibility-filtered by the current principal

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use warranty_core::domain::{Brand, BrandPatch, NewBrand, Principal};
use warranty_core::error::DomainError;

use crate::dto::{BrandListDto, SetActiveBrandRequest};
use crate::response::ApiResponse;
use crate::state::AppState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

fn unauthorized() -> HandlerError {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::error("UNAUTHENTICATED", "Login required")),
    )
}

fn domain_error(err: DomainError) -> HandlerError {
    let (status, code) = match &err {
        DomainError::BrandNotFound(_) => (StatusCode::NOT_FOUND, "BRAND_NOT_FOUND"),
        DomainError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };
    (status, Json(ApiResponse::error(code, &err.to_string())))
}

async fn require_principal(state: &AppState) -> Result<Principal, HandlerError> {
    state
        .identity
        .current_principal()
        .await
        .map_err(domain_error)?
        .ok_or_else(unauthorized)
}

/// List visible brands - GET /api/v1/brands
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BrandListDto>>, HandlerError> {
    let principal = require_principal(&state).await?;
    let scope = state.brands.read().await;
    Ok(Json(ApiResponse::success(BrandListDto {
        brands: scope.visible_brands(&principal),
        active: scope.active_brand().cloned(),
    })))
}

/// Add a brand - POST /api/v1/brands
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewBrand>,
) -> Result<Json<ApiResponse<Brand>>, HandlerError> {
    require_principal(&state).await?;
    let mut scope = state.brands.write().await;
    let brand = scope.add_brand(payload).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(brand)))
}

/// Update a brand - PUT /api/v1/brands/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BrandPatch>,
) -> Result<Json<ApiResponse<Brand>>, HandlerError> {
    require_principal(&state).await?;
    let mut scope = state.brands.write().await;
    let brand = scope.update_brand(id, payload).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(brand)))
}

/// Delete a brand - DELETE /api/v1/brands/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, HandlerError> {
    require_principal(&state).await?;
    let mut scope = state.brands.write().await;
    scope.delete_brand(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

/// Switch the active brand - PUT /api/v1/brands/active
pub async fn set_active(
    State(state): State<AppState>,
    Json(payload): Json<SetActiveBrandRequest>,
) -> Result<Json<ApiResponse<Option<Brand>>>, HandlerError> {
    require_principal(&state).await?;
    let mut scope = state.brands.write().await;

    let brand = match payload.brand_id {
        Some(id) => Some(
            scope
                .brands()
                .iter()
                .find(|b| b.id == id)
                .cloned()
                .ok_or_else(|| domain_error(DomainError::BrandNotFound(id)))?,
        ),
        None => None,
    };

    scope.set_active_brand(brand).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(scope.active_brand().cloned())))
}
