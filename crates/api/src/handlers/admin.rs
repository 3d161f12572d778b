//! Admin handlers driving the project lifecycle.
//!
//! Every endpoint requires the admin role. Each action is a single status
//! move; the project transition table rejects anything out of order.

use aethera_core::error::CoreError;
use aethera_core::project_status::ProjectStatus;
use aethera_db::models::project::{Project, UpdateProjectStatus};
use aethera_db::repositories::{ProjectRepo, UserRepo};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// PUT /admin/projects/{id}/status
// ---------------------------------------------------------------------------

/// Move a project to any status the transition table allows, optionally
/// merging token details.
pub async fn set_project_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProjectStatus>,
) -> AppResult<impl IntoResponse> {
    let status = ProjectStatus::from_str_db(&input.status)?;
    let project =
        ProjectRepo::update_status(&state.store, &id, status, input.tokenization).await?;

    tracing::info!(
        project_id = %id,
        to = %status,
        user_id = %admin.id(),
        "Project status set by admin",
    );

    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// POST /admin/projects/{id}/approve
// ---------------------------------------------------------------------------

pub async fn approve_project(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = review(&state, &id, ProjectStatus::Approved).await?;
    tracing::info!(project_id = %id, user_id = %admin.id(), "Project approved for tokenization");
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// POST /admin/projects/{id}/reject
// ---------------------------------------------------------------------------

pub async fn reject_project(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = review(&state, &id, ProjectStatus::Rejected).await?;
    tracing::info!(project_id = %id, user_id = %admin.id(), "Project rejected");
    Ok(Json(DataResponse { data: project }))
}

async fn review(state: &AppState, id: &str, decision: ProjectStatus) -> AppResult<Project> {
    Ok(ProjectRepo::update_status(&state.store, id, decision, None).await?)
}

// ---------------------------------------------------------------------------
// POST /admin/projects/{id}/mint
// ---------------------------------------------------------------------------

/// Mint the project's tokens on the mock chain and open it for investment.
pub async fn mint_tokens(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = state.chain.tokenize(&id).await?;

    tracing::info!(
        project_id = %id,
        token_symbol = project.token_symbol.as_deref().unwrap_or_default(),
        token_supply = project.token_supply.unwrap_or_default(),
        user_id = %admin.id(),
        "Tokens minted",
    );

    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// POST /admin/projects/{id}/force-funding
// ---------------------------------------------------------------------------

/// Demo shortcut: fund the project up to its goal.
pub async fn force_full_funding(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::force_full_funding(&state.store, &id).await?;
    tracing::info!(project_id = %id, user_id = %admin.id(), "Simulated full funding");
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// POST /admin/projects/{id}/release
// ---------------------------------------------------------------------------

/// Release escrowed funds to the installer's wallet.
pub async fn release_funds(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let installer_id = ProjectRepo::find_by_id(&state.store, &id)
        .await
        .map(|p| p.installer_id)
        .ok_or_else(|| CoreError::not_found("Project", id.as_str()))?;
    let installer_wallet = UserRepo::find_by_id(&state.store, &installer_id)
        .await
        .and_then(|u| u.wallet_address);

    let project = state
        .chain
        .release_funds(&id, installer_wallet.as_deref())
        .await?;

    tracing::info!(
        project_id = %id,
        amount = project.current_funding,
        user_id = %admin.id(),
        "Funds disbursed",
    );

    Ok(Json(DataResponse { data: project }))
}
