//! Error Module
//!
//! This module defines the error taxonomy for the authentication service
//! and its conversion into HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and status code mapping
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Error Types
//!
//! Every failure a handler can report falls into one of four categories:
//!
//! - `Validation` - malformed, missing, or empty input (400)
//! - `Conflict` - duplicate username or email (409)
//! - `Unauthorized` - bad credentials, merged with "user not found" (401)
//! - `Internal` - unexpected store or hashing failure (500)
//!
//! # HTTP Response Conversion
//!
//! `AuthError` implements `IntoResponse`, so handlers return it directly.
//! The response body is a JSON object with `error` and `status` fields.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
