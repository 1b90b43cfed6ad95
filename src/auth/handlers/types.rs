/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers.
 *
 * # Wire Format
 *
 * Field names follow the frontend's payloads: `roleString` carries the
 * requested role as free text, and `licenseNumber` the doctor's license.
 * Required fields are optional at the wire level so a missing field is
 * reported by the handler as a 400 validation error with the standard
 * message, instead of being rejected during deserialization.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::role::Role;

/// Sign up request
///
/// Candidate user record for registration. `specialty` and
/// `licenseNumber` are required only when the requested role is DOCTOR.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen username
    pub username: Option<String>,
    /// User's email address
    pub email: Option<String>,
    /// User's password (will be hashed before storage)
    pub password: Option<String>,
    /// Requested role as free text (case-insensitive)
    #[serde(rename = "roleString")]
    pub role_string: Option<String>,
    /// Medical specialty (doctors only)
    pub specialty: Option<String>,
    /// License number (doctors only)
    #[serde(rename = "licenseNumber")]
    pub license_number: Option<String>,
}

/// Sign in request
#[derive(Deserialize, Serialize, Debug)]
pub struct SigninRequest {
    /// User's username
    pub username: Option<String>,
    /// User's password (verified against the stored hash)
    pub password: Option<String>,
}

/// Signup confirmation
///
/// Carries no sensitive payload; neither the password nor its hash is
/// ever echoed back.
#[derive(Serialize, Deserialize, Debug)]
pub struct SignupResponse {
    /// Confirmation message
    pub message: String,
}

/// Identity payload returned on successful signin
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignInResponse {
    /// User's unique ID (UUID)
    pub id: Uuid,
    /// User's username
    pub username: String,
    /// User's role
    pub role: Role,
}
