//! User record and DTOs.

use aethera_core::kyc::KycStatus;
use aethera_core::roles::UserRole;
use aethera_core::types::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A platform account. One element of the `aethera_users` blob; the active
/// session blob holds a copy of one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Only tracked for installers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<KycStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl User {
    /// Name shown on the installer's projects: company if known, else person.
    pub fn display_name(&self) -> &str {
        self.company_name.as_deref().unwrap_or(&self.name)
    }
}

/// DTO for the login form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub role: String,
}

/// DTO for the installer KYC form. Only the names are kept; address and
/// registration number are checked for presence.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub registration_number: String,
}

/// DTO for an admin KYC decision.
#[derive(Debug, Deserialize)]
pub struct KycDecision {
    pub status: String,
}
