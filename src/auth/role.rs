/**
 * User Roles
 *
 * This module defines the closed set of roles a user can hold. The role
 * arrives at signup as a free-form string (the `roleString` field) and is
 * normalized here; once stored it is always one of the three values.
 *
 * # Roles
 *
 * - `PATIENT` - books appointments
 * - `DOCTOR` - offers appointments; requires specialty and license number
 * - `ADMIN` - administrative account
 */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User role
///
/// Serialized (JSON and database) as the uppercase name: `PATIENT`,
/// `DOCTOR`, or `ADMIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

/// Error returned when a role string matches none of the known roles
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid role. Must be one of: PATIENT, DOCTOR, ADMIN")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Parse a role string case-insensitively
    ///
    /// Surrounding whitespace is ignored; `"doctor"`, `"Doctor"`, and
    /// `"DOCTOR"` all resolve to [`Role::Doctor`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PATIENT" => Ok(Self::Patient),
            "DOCTOR" => Ok(Self::Doctor),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(ParseRoleError),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Patient => "PATIENT",
            Self::Doctor => "DOCTOR",
            Self::Admin => "ADMIN",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("doctor".parse::<Role>(), Ok(Role::Doctor));
        assert_eq!("Doctor".parse::<Role>(), Ok(Role::Doctor));
        assert_eq!("DOCTOR".parse::<Role>(), Ok(Role::Doctor));
        assert_eq!("patient".parse::<Role>(), Ok(Role::Patient));
        assert_eq!("aDmIn".parse::<Role>(), Ok(Role::Admin));
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!("  admin  ".parse::<Role>(), Ok(Role::Admin));
    }

    #[test]
    fn test_parse_rejects_unknown_roles() {
        assert_eq!("nurse".parse::<Role>(), Err(ParseRoleError));
        assert_eq!("".parse::<Role>(), Err(ParseRoleError));
    }

    #[test]
    fn test_display_matches_wire_format() {
        assert_eq!(Role::Patient.to_string(), "PATIENT");
        assert_eq!(Role::Doctor.to_string(), "DOCTOR");
        assert_eq!(Role::Admin.to_string(), "ADMIN");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Role::Doctor).unwrap();
        assert_eq!(json, "\"DOCTOR\"");
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
