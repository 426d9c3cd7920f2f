//! # Router Assembly
//!
//! Builds the full axum application: routes, the gate, the origin guard,
//! CORS and request tracing. Kept out of `main` so tests can drive the same
//! stack the server runs.

use crate::handlers::health::health_check;
use crate::handlers::profile::get_profile;
use crate::handlers::submission::submit_form;
use crate::middleware::{auth::require_password, origin::require_allowed_origin};
use crate::state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// ## Routes
/// - `GET /`: fixed profile (never gated)
/// - `POST /`: echo of the submitted form (gated)
/// - `GET /health`: liveness probe (never gated)
///
/// ## Layers (outermost first)
/// 1. `TraceLayer`: one span per request
/// 2. `CorsLayer`: CORS headers and preflight answers for the allowed origin
/// 3. `require_allowed_origin`: 403 for any other browser origin
/// 4. `require_password`: the gate, on `/` only
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(
            "/",
            get(get_profile)
                .post(submit_form)
                // MethodRouter::layer also wraps the 405 fallback, so every method is gated
                .layer(axum_middleware::from_fn_with_state(
                    state.clone(),
                    require_password,
                )),
        )
        .route("/health", get(health_check))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_allowed_origin,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
