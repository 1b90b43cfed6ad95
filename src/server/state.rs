/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding the two
 * collaborators the auth handlers depend on:
 *
 * - the user store (trait object, so tests can substitute an in-memory
 *   implementation)
 * - the password hasher
 *
 * Both are constructed exactly once at startup; handlers receive them as
 * explicit dependencies rather than reaching for globals.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the collaborator
 * they need with `State<Arc<dyn UserStore>>` or `State<PasswordHasher>`,
 * following Axum's recommended substate pattern.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::hasher::PasswordHasher;
use crate::auth::users::UserStore;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// User persistence operations
    pub store: Arc<dyn UserStore>,
    /// bcrypt password hasher
    pub hasher: PasswordHasher,
}

/// Allow handlers to extract the user store directly from `AppState`
impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Allow handlers to extract the password hasher directly from `AppState`
impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher.clone()
    }
}
