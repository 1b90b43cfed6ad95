//! MediBook Auth - Main Library
//!
//! MediBook is an appointment booking application for patients and doctors.
//! This crate is its authentication backend: a small Axum HTTP service that
//! registers users and verifies their credentials against a PostgreSQL
//! user store with bcrypt password hashing.
//!
//! # Overview
//!
//! The service exposes exactly two operations:
//!
//! - `POST /api/auth/signup` - validate a candidate user, enforce
//!   username/email uniqueness, hash the password, persist the record
//! - `POST /api/auth/signin` - look up a user and verify the supplied
//!   password, returning a minimal identity payload
//!
//! # Module Structure
//!
//! The library is organized into four modules:
//!
//! - **`auth`** - The core: user model and store, role enumeration,
//!   password hashing, and the two HTTP handlers
//! - **`error`** - The error taxonomy and its HTTP response conversion
//! - **`routes`** - Route registration and router assembly (CORS, fallback)
//! - **`server`** - Configuration loading, application state, and app
//!   initialization
//!
//! # Usage
//!
//! ```rust,no_run
//! use medibook::server::init::create_app;
//!
//! # async fn example() -> Result<(), medibook::server::config::ConfigError> {
//! let app = create_app().await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never logged
//! - Signin failures use a single generic message so responses never
//!   reveal whether a username exists
//! - Username and email uniqueness is enforced by database constraints,
//!   not just by the handler's pre-checks

/// Authentication core: users, roles, hashing, handlers
pub mod auth;

/// Error taxonomy and HTTP conversion
pub mod error;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

// Re-export commonly used types
pub use auth::handlers::{signin, signup};
pub use error::AuthError;
pub use server::state::AppState;
