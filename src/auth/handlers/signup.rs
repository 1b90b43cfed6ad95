/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate that username, password, email, and role are present and
 *    non-empty after trimming
 * 2. Normalize username and email by trimming whitespace
 * 3. Check that the username and email are not already taken
 * 4. Resolve the role string (case-insensitive) to a role
 * 5. Validate doctor-only fields, or clear them for non-doctors
 * 6. Hash the password using bcrypt
 * 7. Persist the user
 *
 * # Security
 *
 * - Passwords are hashed with a per-hash salt before storage
 * - The response carries no password material
 * - A unique-constraint violation at insert time is reported as the same
 *   conflict as a failed pre-check, so a concurrent duplicate signup
 *   cannot slip through as an internal error
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::handlers::trimmed;
use crate::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::auth::hasher::PasswordHasher;
use crate::auth::role::{ParseRoleError, Role};
use crate::auth::users::{NewUser, StoreError, UniqueField, UserStore};
use crate::error::AuthError;

/// Sign up handler
///
/// Validates the candidate record, enforces username/email uniqueness,
/// hashes the password, and persists the user.
///
/// # Arguments
///
/// * `State(store)` - User store
/// * `State(hasher)` - Password hasher
/// * `Json(request)` - Signup request
///
/// # Errors
///
/// * `400 Bad Request` - missing/empty required fields, unknown role, or
///   missing doctor-only fields
/// * `409 Conflict` - username or email already exists
/// * `500 Internal Server Error` - hashing or persistence failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "a@x.com",
///   "password": "pw1",
///   "roleString": "PATIENT"
/// }
/// ```
pub async fn signup(
    State(store): State<Arc<dyn UserStore>>,
    State(hasher): State<PasswordHasher>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, AuthError> {
    tracing::info!(
        "Signup request received: username={:?}, email={:?}, role={:?}",
        request.username,
        request.email,
        request.role_string
    );

    // Validate required fields. The password is checked against its
    // trimmed form but hashed exactly as supplied.
    let (Some(username), Some(password), Some(email), Some(role_string)) = (
        trimmed(&request.username),
        request.password.as_deref().filter(|p| !p.trim().is_empty()),
        trimmed(&request.email),
        trimmed(&request.role_string),
    ) else {
        tracing::warn!("Invalid signup request: username, password, email, or role missing or empty");
        return Err(AuthError::validation(
            "Username, password, email, and role are required and cannot be empty",
        ));
    };

    // Check for existing username
    if store.find_by_username(username).await?.is_some() {
        tracing::warn!("Signup failed: username {} already exists", username);
        return Err(AuthError::Conflict(UniqueField::Username));
    }

    // Check for existing email
    if store.find_by_email(email).await?.is_some() {
        tracing::warn!("Signup failed: email {} already exists", email);
        return Err(AuthError::Conflict(UniqueField::Email));
    }

    // Resolve the role string to a Role
    let role: Role = role_string.parse().map_err(|e: ParseRoleError| {
        tracing::warn!("Signup failed: invalid role {}", role_string);
        AuthError::validation(e.to_string())
    })?;

    // Validate doctor-specific fields; clear them for everyone else
    let (specialty, license_number) = if role == Role::Doctor {
        if trimmed(&request.specialty).is_none() {
            tracing::warn!("Signup failed: specialty is required for doctors");
            return Err(AuthError::validation("Specialty is required for doctors"));
        }
        if trimmed(&request.license_number).is_none() {
            tracing::warn!("Signup failed: license number is required for doctors");
            return Err(AuthError::validation("License number is required for doctors"));
        }
        (request.specialty.clone(), request.license_number.clone())
    } else {
        (None, None)
    };

    // Hash password
    let password_hash = hasher.hash(password).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        AuthError::internal(format!("Failed to sign up: {e}"))
    })?;

    // Persist. A unique violation here means we lost the race against a
    // concurrent signup; report it as the same conflict the pre-check
    // would have produced.
    let new_user = NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash,
        role,
        specialty,
        license_number,
    };
    let user = store.create(new_user).await.map_err(|e| match e {
        StoreError::Duplicate(field) => {
            tracing::warn!("Signup failed: {} already exists at insert time", field);
            AuthError::Conflict(field)
        }
        StoreError::Database(e) => {
            tracing::error!("Error during signup for username {}: {:?}", username, e);
            AuthError::internal(format!("Failed to sign up: {e}"))
        }
    })?;

    tracing::info!(
        "User signed up successfully: id={}, username={}, email={}, role={}",
        user.id,
        user.username,
        user.email,
        user.role
    );

    Ok(Json(SignupResponse {
        message: "Successfully signed up".to_string(),
    }))
}
