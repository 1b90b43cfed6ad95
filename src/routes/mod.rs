//! Route Configuration Module
//!
//! This module configures the HTTP routes for the auth server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, CORS layer, fallback
//! └── api_routes.rs   - /api/auth endpoint registration
//! ```
//!
//! # Routes
//!
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/signin` - Credential verification
//!
//! All other paths fall through to a 404 handler.

/// Router assembly
pub mod router;

/// API endpoint registration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
