//! Activity tracking for cart expiry.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Expire an idle cart, then mark the cart as active, before the request
/// reaches its handler.
///
/// The first request after a quiet window therefore sees an empty cart.
/// Runs for every request, static files included.
pub async fn track_activity_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.cart().expire_if_idle();
    state.cart().touch();
    next.run(request).await
}
