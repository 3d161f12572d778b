//! Project lifecycle states and their transition table.
//!
//! A project moves `PENDING_REVIEW -> APPROVED -> LIVE -> FUNDED -> DISBURSED`,
//! or is `REJECTED` straight out of review. The only automatic move is
//! `LIVE -> FUNDED` once the funding total reaches the goal.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Submitted by an installer, waiting for an admin.
    PendingReview,
    /// Ready for minting.
    Approved,
    /// Tokenized and open for investment.
    Live,
    /// Goal reached.
    Funded,
    /// Funds released to the installer.
    Disbursed,
    Rejected,
}

/// Statuses an investor can browse.
pub const INVESTOR_VISIBLE_STATUSES: &[ProjectStatus] = &[
    ProjectStatus::Live,
    ProjectStatus::Funded,
    ProjectStatus::Disbursed,
];

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 6] = [
        Self::PendingReview,
        Self::Approved,
        Self::Live,
        Self::Funded,
        Self::Disbursed,
        Self::Rejected,
    ];

    /// Parse a status string (query parameters, stored blobs).
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid project status '{s}'. Must be one of: {}",
                    Self::ALL.map(|st| st.as_str()).join(", ")
                ))
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingReview => "PENDING_REVIEW",
            Self::Approved => "APPROVED",
            Self::Live => "LIVE",
            Self::Funded => "FUNDED",
            Self::Disbursed => "DISBURSED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns the set of statuses this status may move to.
    ///
    /// - `PENDING_REVIEW` -> `APPROVED`, `REJECTED`
    /// - `APPROVED`       -> `LIVE`
    /// - `LIVE`           -> `FUNDED`
    /// - `FUNDED`         -> `DISBURSED`
    /// - `DISBURSED`, `REJECTED` are terminal
    pub fn valid_transitions(&self) -> &'static [ProjectStatus] {
        match self {
            Self::PendingReview => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Live],
            Self::Live => &[Self::Funded],
            Self::Funded => &[Self::Disbursed],
            Self::Disbursed | Self::Rejected => &[],
        }
    }

    pub fn can_transition_to(&self, next: ProjectStatus) -> bool {
        self.valid_transitions().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }

    pub fn is_investor_visible(&self) -> bool {
        INVESTOR_VISIBLE_STATUSES.contains(self)
    }

    /// Only live projects take new money.
    pub fn accepts_investment(&self) -> bool {
        *self == Self::Live
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate that a project may move from `current` to `next`.
pub fn validate_transition(current: ProjectStatus, next: ProjectStatus) -> Result<(), CoreError> {
    if current.can_transition_to(next) {
        return Ok(());
    }
    let allowed: Vec<&str> = current.valid_transitions().iter().map(|s| s.as_str()).collect();
    Err(CoreError::Conflict(format!(
        "Cannot transition project from '{current}' to '{next}'. Allowed transitions: {allowed:?}"
    )))
}

/// Status a project ends up in after its funding total changed to `total`.
///
/// Reaching the goal while `LIVE` forces `FUNDED`; every other status is
/// left alone no matter the total.
pub fn status_after_funding(current: ProjectStatus, total: Amount, goal: Amount) -> ProjectStatus {
    if current == ProjectStatus::Live && total >= goal {
        ProjectStatus::Funded
    } else {
        current
    }
}
