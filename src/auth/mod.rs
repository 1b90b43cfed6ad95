//! Authentication Module
//!
//! This module handles user registration and credential verification.
//! It provides HTTP handlers for the two auth endpoints and the
//! collaborators they depend on: the user store and the password hasher.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`role`** - The closed role enumeration and its parsing
//! - **`users`** - User model, the `UserStore` trait, and the Postgres store
//! - **`hasher`** - bcrypt password hashing and verification
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── role.rs         - Role enumeration
//! ├── users.rs        - User model and store
//! ├── hasher.rs       - Password hashing
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     └── signin.rs   - Credential verification handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: Validate fields → check uniqueness → resolve role →
//!    hash password → persist user
//! 2. **Signin**: Validate fields → look up user → verify password →
//!    return `{id, username, role}`
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Signin returns one generic 401 for both unknown-username and
//!   wrong-password (no information leakage)
//! - The database enforces username/email uniqueness; the handler
//!   pre-checks are a fast path only

/// Role enumeration and parsing
pub mod role;

/// User model, store trait, and Postgres store
pub mod users;

/// bcrypt password hashing
pub mod hasher;

/// HTTP handlers for the auth endpoints
pub mod handlers;

/// In-memory store for tests
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// Re-export commonly used types and handlers
pub use handlers::types::{SignInResponse, SigninRequest, SignupRequest, SignupResponse};
pub use handlers::{signin, signup};
pub use hasher::PasswordHasher;
pub use role::Role;
pub use users::{PgUserStore, User, UserStore};
