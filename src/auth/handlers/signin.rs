/**
 * Signin Handler
 *
 * This module implements the credential verification handler for
 * POST /api/auth/signin.
 *
 * # Authentication Process
 *
 * 1. Validate that username and password are present and non-empty after
 *    trimming
 * 2. Look up the user by the trimmed username
 * 3. Verify the password against the stored bcrypt hash
 * 4. Return the user's id, username, and role
 *
 * # Security
 *
 * - "User not found" and "wrong password" return the identical status
 *   and message, so the response never reveals whether a username exists
 * - Password verification uses bcrypt's constant-time comparison
 * - Passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::handlers::trimmed;
use crate::auth::handlers::types::{SignInResponse, SigninRequest};
use crate::auth::hasher::PasswordHasher;
use crate::auth::users::UserStore;
use crate::error::AuthError;

/// Sign in handler
///
/// Verifies the supplied credentials and returns a minimal identity
/// payload. No session or token is created.
///
/// # Arguments
///
/// * `State(store)` - User store
/// * `State(hasher)` - Password hasher
/// * `Json(request)` - Signin request containing username and password
///
/// # Errors
///
/// * `400 Bad Request` - missing or empty username/password
/// * `401 Unauthorized` - unknown username or wrong password (one
///   uniform message for both)
/// * `500 Internal Server Error` - store lookup or verification failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signin HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "pw1"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "username": "alice",
///   "role": "PATIENT"
/// }
/// ```
pub async fn signin(
    State(store): State<Arc<dyn UserStore>>,
    State(hasher): State<PasswordHasher>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<SignInResponse>, AuthError> {
    tracing::info!("Signin request received: username={:?}", request.username);

    // The password is checked against its trimmed form but verified
    // exactly as supplied.
    let (Some(username), Some(password)) = (
        trimmed(&request.username),
        request.password.as_deref().filter(|p| !p.trim().is_empty()),
    ) else {
        tracing::warn!("Invalid signin request: username or password missing or empty");
        return Err(AuthError::validation(
            "Username and password are required and cannot be empty",
        ));
    };

    let user = store.find_by_username(username).await.map_err(|e| {
        tracing::error!("Error looking up user {}: {:?}", username, e);
        AuthError::internal(format!("Failed to sign in: {e}"))
    })?;

    // Unknown username and wrong password collapse into one branch so
    // the response never reveals which check failed.
    let Some(user) = user else {
        tracing::warn!("Signin failed: invalid credentials for username {}", username);
        return Err(AuthError::Unauthorized);
    };

    let valid = hasher.verify(password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        AuthError::internal(format!("Failed to sign in: {e}"))
    })?;

    if !valid {
        tracing::warn!("Signin failed: invalid credentials for username {}", username);
        return Err(AuthError::Unauthorized);
    }

    tracing::info!(
        "User signed in successfully: username={}, role={}",
        user.username,
        user.role
    );

    Ok(Json(SignInResponse {
        id: user.id,
        username: user.username,
        role: user.role,
    }))
}
