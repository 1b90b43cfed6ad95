/**
 * Server Configuration
 *
 * This module handles loading the server configuration from environment
 * variables: the PostgreSQL connection, the bcrypt cost factor, and the
 * allowed frontend origin for CORS.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `BCRYPT_COST` - bcrypt cost factor (default: bcrypt::DEFAULT_COST)
 * - `FRONTEND_ORIGIN` - allowed CORS origin (default: http://localhost:3000)
 *
 * # Error Handling
 *
 * Unlike optional integrations, the database is the service's single
 * source of truth; a missing or unreachable database is a startup error,
 * not a degraded mode.
 */

use sqlx::PgPool;
use thiserror::Error;

/// Configuration failure during startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `DATABASE_URL` is not set
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    /// The connection pool could not be created
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// Embedded migrations failed to apply
    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs the embedded migrations (creating the `users` table with its
///    unique constraints)
///
/// # Errors
///
/// Returns a [`ConfigError`] if the URL is missing, the connection fails,
/// or the migrations cannot be applied.
pub async fn load_database() -> Result<PgPool, ConfigError> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(&database_url)
        .await
        .map_err(ConfigError::Connect)?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// bcrypt cost factor from `BCRYPT_COST`, defaulting to the crate default
pub fn bcrypt_cost() -> u32 {
    std::env::var("BCRYPT_COST")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(bcrypt::DEFAULT_COST)
}

/// Frontend origin allowed by the CORS layer
pub fn frontend_origin() -> String {
    std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
