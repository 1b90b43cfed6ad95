//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading from the environment
//! - **`init`** - Server initialization and app creation
//!
//! # State Management
//!
//! `AppState` holds the two collaborators the handlers depend on - the
//! user store and the password hasher - constructed once at startup and
//! injected into handlers through axum's `State` extractor.
//!
//! # Initialization Flow
//!
//! 1. **Configuration loading**: connect to PostgreSQL and run migrations
//! 2. **State creation**: build the store and the hasher
//! 3. **Router creation**: register routes and the CORS layer

/// Application state management
pub mod state;

/// Configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
