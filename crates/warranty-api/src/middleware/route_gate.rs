// ============================================================================
// Warranty API - Route Gate Middleware
// File: crates/warranty-api/src/middleware/route_gate.rs
// ============================================================================
//! Runs the route authorization gate in front of console navigation

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::warn;

use warranty_core::services::RouteDecision;

use crate::state::AppState;

/// Gate every console navigation.
///
/// The current principal is read fresh from the session store on each
/// attempt - a logout in another tab takes effect on the next navigation.
/// Denials are silent redirects, never error responses.
pub async fn route_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();

    let principal = match state.identity.current_principal().await {
        Ok(principal) => principal,
        Err(e) => {
            warn!("Session read failed, treating as unauthenticated: {}", e);
            None
        }
    };

    let tenant = state.session.read().await.tenant().cloned();

    match state.gate.authorize(&path, principal.as_ref(), tenant.as_ref()) {
        RouteDecision::Allow => next.run(req).await,
        RouteDecision::Redirect(target) => Redirect::to(&target).into_response(),
    }
}
