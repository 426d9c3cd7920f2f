use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::ORIGIN,
    middleware::Next,
    response::Response,
};

/// Reject browser requests from any origin but the configured one.
///
/// `CorsLayer` only decides which response headers to add; a request from a
/// foreign origin would still run the handler. This turns it away with a 403
/// before the gate or handler see it. Requests without an `Origin` header
/// (curl, server-to-server) are let through.
pub async fn require_allowed_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    match request.headers().get(ORIGIN) {
        Some(origin) if *origin != state.allowed_origin => {
            tracing::debug!(origin = ?origin, "request from disallowed origin");
            Err(AppError::Forbidden)
        }
        _ => Ok(next.run(request).await),
    }
}
