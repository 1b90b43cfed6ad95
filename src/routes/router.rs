/**
 * Router Configuration
 *
 * This module provides the main router creation function: the auth
 * routes, the CORS layer for the configured frontend origin, and a 404
 * fallback.
 *
 * # CORS
 *
 * The layer allows a single configured origin (see
 * `config::frontend_origin`) with credentials, the methods the frontend
 * uses, and an explicit header allowlist. Widening the header list to a
 * wildcard is deliberately avoided.
 */

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::routes::api_routes::configure_auth_routes;
use crate::server::config;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the store and hasher
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let router = configure_auth_routes(Router::new());

    // CORS for the known frontend origin
    let router = router.layer(cors_layer());

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.with_state(app_state)
}

/// CORS layer for the configured frontend origin
///
/// Credentials are allowed, so the origin must be exact rather than a
/// wildcard; an unparseable configured origin falls back to the local
/// development frontend.
fn cors_layer() -> CorsLayer {
    let origin = config::frontend_origin()
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3000"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
