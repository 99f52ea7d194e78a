// ============================================================================
// Warranty API - Auth Handlers
// File: crates/warranty-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (login, signup, logout, me)

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use warranty_core::domain::NewAccount;
use warranty_core::error::DomainError;

use crate::dto::{AuthResponse, LoginRequest, PrincipalDto};
use crate::response::ApiResponse;
use crate::state::AppState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

fn domain_error(err: DomainError) -> HandlerError {
    let (status, code) = match &err {
        DomainError::InvalidCredentials | DomainError::PrincipalNotActive => {
            (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        }
        DomainError::DuplicateAccount(_) => (StatusCode::CONFLICT, "DUPLICATE_ACCOUNT"),
        DomainError::ConcurrentAuthOperation => (StatusCode::CONFLICT, "AUTH_IN_FLIGHT"),
        DomainError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };
    (status, Json(ApiResponse::error(code, &err.to_string())))
}

/// Login handler - POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, HandlerError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("VALIDATION_ERROR", "Email and password are required")),
        ));
    }

    let session = state
        .identity
        .login(&payload.email, &payload.password, payload.tenant.as_deref())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(AuthResponse::from(&session))))
}

/// Signup handler - POST /api/v1/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<NewAccount>,
) -> Result<Json<ApiResponse<AuthResponse>>, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("VALIDATION_ERROR", &e.to_string())),
        ));
    }

    let session = state.identity.signup(payload).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(AuthResponse::from(&session))))
}

/// Logout handler - POST /api/v1/auth/logout
pub async fn logout(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    state.identity.logout().await;
    Json(ApiResponse::success(()))
}

/// Current principal - GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Option<PrincipalDto>>>, HandlerError> {
    let principal = state
        .identity
        .current_principal()
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        principal.as_ref().map(PrincipalDto::from),
    )))
}
