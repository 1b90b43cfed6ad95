/**
 * User Model and Store
 *
 * This module defines the persisted user record, the `UserStore` trait the
 * handlers depend on, and the PostgreSQL implementation.
 *
 * # Store Contract
 *
 * The store exposes exactly the three operations the handlers need:
 * lookup by username, lookup by email, and create. Uniqueness of username
 * and email is enforced by the database constraints in the `users` table;
 * a unique violation raised by the insert is reported as
 * `StoreError::Duplicate` with the violated field, so a signup that loses
 * the race between pre-check and insert still surfaces as a conflict
 * rather than an internal error.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::role::Role;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, trimmed before storage)
    pub username: String,
    /// User email address (unique, trimmed before storage)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Role (PATIENT, DOCTOR, or ADMIN)
    pub role: Role,
    /// Medical specialty; populated only for doctors
    pub specialty: Option<String>,
    /// License number; populated only for doctors
    pub license_number: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Candidate user record, already validated and hashed by the signup
/// handler. The store assigns the id and timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub specialty: Option<String>,
    pub license_number: Option<String>,
}

/// The user columns that carry a unique constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Email => f.write_str("email"),
        }
    }
}

/// Store failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the insert
    #[error("duplicate {0}")]
    Duplicate(UniqueField),

    /// Any other database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// User persistence operations
///
/// Constructed once at startup and shared with the handlers through
/// application state. The production implementation is [`PgUserStore`];
/// tests use an in-memory implementation with the same uniqueness rules.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new user, assigning id and timestamps
    ///
    /// Returns `StoreError::Duplicate` if the username or email is
    /// already taken.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;
}

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role, specialty, license_number, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role, specialty, license_number, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, role, specialty, license_number, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, username, email, password_hash, role, specialty, license_number, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.role)
        .bind(&new_user.specialty)
        .bind(&new_user.license_number)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(user)
    }
}

/// Map a failed insert to a duplicate error when a unique constraint
/// fired, using the constraint names from the migration.
fn map_insert_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            let field = match db.constraint() {
                Some("users_email_key") => UniqueField::Email,
                _ => UniqueField::Username,
            };
            StoreError::Duplicate(field)
        }
        other => StoreError::Database(other),
    }
}
