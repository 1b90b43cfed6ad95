/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum application:
 * connecting to the database, constructing the store and hasher, and
 * assembling the router.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL and run migrations
 * 2. Construct the user store and the password hasher once
 * 3. Build the router with the shared state
 */

use std::sync::Arc;

use axum::Router;

use crate::auth::hasher::PasswordHasher;
use crate::auth::users::{PgUserStore, UserStore};
use crate::routes::router::create_router;
use crate::server::config::{self, ConfigError};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns a [`ConfigError`] if the database cannot be reached or the
/// migrations fail; the service does not start without its store.
pub async fn create_app() -> Result<Router, ConfigError> {
    tracing::info!("Initializing MediBook auth server");

    let pool = config::load_database().await?;

    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool));
    let hasher = PasswordHasher::new(config::bcrypt_cost());

    let app_state = AppState { store, hasher };

    Ok(create_router(app_state))
}
