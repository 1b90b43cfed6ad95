/**
 * Test Support
 *
 * In-memory `UserStore` implementation used by the handler and router
 * tests so the suite runs without a live PostgreSQL instance. It applies
 * the same uniqueness rules as the `users` table, including rejecting a
 * duplicate insert that slipped past the handler's pre-checks.
 *
 * Compiled only for tests (or with the `test-support` feature, which the
 * integration tests enable).
 */

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::users::{NewUser, StoreError, UniqueField, User, UserStore};

/// In-memory user store with table-equivalent uniqueness enforcement
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users, for asserting nothing was persisted
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == new_user.username) {
            return Err(StoreError::Duplicate(UniqueField::Username));
        }
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(StoreError::Duplicate(UniqueField::Email));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            specialty: new_user.specialty,
            license_number: new_user.license_number,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());

        Ok(user)
    }
}
