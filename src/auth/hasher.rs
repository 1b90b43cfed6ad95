/**
 * Password Hasher
 *
 * This module wraps bcrypt hashing and verification behind a small struct
 * constructed once at startup, so the cost factor is configured in one
 * place and the handlers receive the hasher as an explicit dependency.
 *
 * # Security
 *
 * - bcrypt generates a unique salt per hash; two hashes of the same
 *   password differ
 * - Verification is one-way; the stored digest never yields the plaintext
 * - The cost factor is adaptive and can be raised via `BCRYPT_COST`
 *   without invalidating existing digests
 */

use bcrypt::BcryptError;

/// bcrypt password hasher with a fixed cost factor
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    ///
    /// Each call salts independently, so repeated calls with the same
    /// input produce different digests.
    pub fn hash(&self, plaintext: &str) -> Result<String, BcryptError> {
        bcrypt::hash(plaintext, self.cost)
    }

    /// Verify a plaintext password against a stored digest
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
        bcrypt::verify(plaintext, digest)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
