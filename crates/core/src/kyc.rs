//! Installer KYC states and their transition table.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    /// Nothing submitted yet.
    #[default]
    None,
    Pending,
    Approved,
    Rejected,
}

impl KycStatus {
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "NONE" => Ok(Self::None),
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(CoreError::Validation(format!(
                "Invalid KYC status '{s}'. Must be one of: NONE, PENDING, APPROVED, REJECTED"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns the set of statuses this status may move to.
    ///
    /// - `NONE`     -> `PENDING` (first submission)
    /// - `PENDING`  -> `APPROVED`, `REJECTED` (admin decision)
    /// - `REJECTED` -> `PENDING` (resubmission)
    /// - `APPROVED` is final
    pub fn valid_transitions(&self) -> &'static [KycStatus] {
        match self {
            Self::None => &[Self::Pending],
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Rejected => &[Self::Pending],
            Self::Approved => &[],
        }
    }

    /// Whether an installer in this state may submit new projects.
    pub fn allows_project_creation(&self) -> bool {
        *self == Self::Approved
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a KYC move from `current` to `next`.
pub fn validate_transition(current: KycStatus, next: KycStatus) -> Result<(), CoreError> {
    if current.valid_transitions().contains(&next) {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Cannot change KYC status from '{current}' to '{next}'"
        )))
    }
}

/// Validate that `decision` is something an admin can decide.
pub fn validate_decision(decision: KycStatus) -> Result<(), CoreError> {
    match decision {
        KycStatus::Approved | KycStatus::Rejected => Ok(()),
        other => Err(CoreError::Validation(format!(
            "Invalid KYC decision '{other}'. Must be one of: APPROVED, REJECTED"
        ))),
    }
}

/// Gate project submission on the installer's KYC status.
pub fn ensure_can_create_projects(status: Option<KycStatus>) -> Result<(), CoreError> {
    let status = status.unwrap_or_default();
    if status.allows_project_creation() {
        return Ok(());
    }
    match status {
        KycStatus::Pending => Err(CoreError::Forbidden(
            "KYC verification is pending review".into(),
        )),
        _ => Err(CoreError::Forbidden(
            "KYC verification required before submitting projects".into(),
        )),
    }
}
