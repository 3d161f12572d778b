//! User roles and well-known accounts.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The only email accepted for an admin login when no admin account exists
/// under the given address.
pub const ADMIN_EMAIL: &str = "admin@aethera.com";

/// The three platform roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Installer,
    Investor,
    Admin,
}

impl UserRole {
    /// Parse a role string as stored in the user blob.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "INSTALLER" => Ok(Self::Installer),
            "INVESTOR" => Ok(Self::Investor),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(CoreError::Validation(format!(
                "Invalid role '{s}'. Must be one of: INSTALLER, INVESTOR, ADMIN"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Installer => "INSTALLER",
            Self::Investor => "INVESTOR",
            Self::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
