//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the two authentication
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and shared helpers
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── signin.rs   - Credential verification handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`signin`** - POST /api/auth/signin - Credential verification
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never echoed back
//! - Signin failures use one generic message for both unknown-username and
//!   wrong-password

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

// Re-export commonly used types
pub use types::{SignInResponse, SigninRequest, SignupRequest, SignupResponse};

// Re-export handlers
pub use signin::signin;
pub use signup::signup;

/// Normalize an optional request field: trim surrounding whitespace and
/// treat absent or blank values alike.
///
/// Returns the trimmed contents, or `None` if the field is absent or
/// empty after trimming.
pub(crate) fn trimmed(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_absent_and_blank() {
        assert_eq!(trimmed(&None), None);
        assert_eq!(trimmed(&Some(String::new())), None);
        assert_eq!(trimmed(&Some("   ".to_string())), None);
    }

    #[test]
    fn test_trimmed_strips_whitespace() {
        assert_eq!(trimmed(&Some(" alice ".to_string())), Some("alice"));
        assert_eq!(trimmed(&Some("alice".to_string())), Some("alice"));
    }
}
