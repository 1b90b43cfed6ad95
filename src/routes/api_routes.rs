/**
 * API Route Handlers
 *
 * This module registers the authentication endpoints on the router.
 *
 * # Routes
 *
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/signin` - Credential verification
 *
 * Both routes are public; the service issues no sessions or tokens, so
 * there are no protected routes.
 */

use axum::Router;

use crate::auth::{signin, signup};
use crate::server::state::AppState;

/// Configure the authentication routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the auth routes configured
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/signup", axum::routing::post(signup))
        .route("/api/auth/signin", axum::routing::post(signin))
}
