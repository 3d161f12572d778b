//! Project record and DTOs.

use aethera_core::project_status::ProjectStatus;
use aethera_core::types::{Amount, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A solar project seeking funding. One element of the `aethera_projects` blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub installer_id: EntityId,
    pub installer_name: String,
    pub title: String,
    pub summary: String,
    pub location: String,
    pub funding_goal: Amount,
    pub current_funding: Amount,
    pub status: ProjectStatus,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_supply: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for submitting a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub summary: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: String,
    #[validate(range(exclusive_min = 0.0, message = "must be a positive number"))]
    pub funding_goal: Amount,
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Token parameters merged into a project when it is minted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizationDetails {
    pub token_supply: u64,
    pub token_symbol: String,
}

/// DTO for an admin status override.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectStatus {
    pub status: String,
    #[serde(default)]
    pub tokenization: Option<TokenizationDetails>,
}

/// Query parameters for listing projects.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
}

/// DTO for an investment through the mock chain.
#[derive(Debug, Deserialize)]
pub struct InvestRequest {
    pub amount: Amount,
}
