//! Handlers for installer KYC submission and admin review.

use aethera_core::kyc::{self, KycStatus};
use aethera_db::models::user::{KycDecision, KycSubmission};
use aethera_db::repositories::UserRepo;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::rbac::{RequireAdmin, RequireInstaller};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /kyc
// ---------------------------------------------------------------------------

/// Submit (or resubmit after rejection) the KYC form.
pub async fn submit_kyc(
    RequireInstaller(installer): RequireInstaller,
    State(state): State<AppState>,
    Json(input): Json<KycSubmission>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::submit_kyc(&state.store, installer.id(), &input).await?;
    Ok(Json(DataResponse { data: user }))
}

// ---------------------------------------------------------------------------
// GET /admin/kyc
// ---------------------------------------------------------------------------

/// Installers waiting for a KYC decision.
pub async fn list_pending_kyc(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_pending_kyc(&state.store).await;
    Ok(Json(DataResponse { data: users }))
}

// ---------------------------------------------------------------------------
// PUT /admin/kyc/{user_id}
// ---------------------------------------------------------------------------

/// Approve or reject a pending KYC submission.
pub async fn decide_kyc(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(input): Json<KycDecision>,
) -> AppResult<impl IntoResponse> {
    let decision = KycStatus::from_str_db(&input.status)?;
    kyc::validate_decision(decision)?;

    let user = UserRepo::update_kyc(&state.store, &user_id, decision).await?;

    tracing::info!(
        user_id = %user_id,
        decision = %decision,
        admin_id = %admin.id(),
        "KYC decision recorded",
    );

    Ok(Json(DataResponse { data: user }))
}
