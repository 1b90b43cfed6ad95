/**
 * Auth Error Types
 *
 * This module defines the error type used by the authentication handlers.
 * Each variant maps to one HTTP status code and one user-facing message.
 *
 * # Error Categories
 *
 * - `Validation` - missing/empty fields, an unparseable role, or missing
 *   doctor-only fields. Always reported to the caller, never retried.
 * - `Conflict` - a duplicate username or email, whether caught by the
 *   handler's pre-check or by the database unique constraint at insert
 *   time.
 * - `Unauthorized` - bad credentials. "User not found" and "wrong
 *   password" share this variant so the response never reveals whether a
 *   username exists.
 * - `Internal` - unexpected store or hashing failure, with the underlying
 *   cause in the message for diagnostics.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::users::{StoreError, UniqueField};

/// Authentication error
///
/// This enum represents all failures the signup and signin handlers can
/// report. Each variant carries enough context to produce its HTTP
/// response; the mapping lives in `status_code` and `message`.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed, missing, or empty input
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Duplicate username or email
    #[error("{0} already exists")]
    Conflict(UniqueField),

    /// Bad credentials (user not found or wrong password)
    #[error("Invalid username or password")]
    Unauthorized,

    /// Unexpected store or hashing failure
    #[error("{message}")]
    Internal {
        /// Message carrying the underlying cause
        message: String,
    },
}

impl AuthError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Conflict` - 409 Conflict
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::Conflict(UniqueField::Username) => "Username already exists".to_string(),
            Self::Conflict(UniqueField::Email) => "Email already exists".to_string(),
            Self::Unauthorized => "Invalid username or password".to_string(),
            Self::Internal { message } => message.clone(),
        }
    }
}

/// Store failures surface as conflicts when a unique constraint fired and
/// as internal errors otherwise.
impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(field) => Self::Conflict(field),
            StoreError::Database(e) => Self::internal(format!("Database error: {e}")),
        }
    }
}
