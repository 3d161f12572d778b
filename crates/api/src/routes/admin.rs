//! Route definitions for the `/admin` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin, kyc};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the admin role (enforced by handler extractors).
///
/// ```text
/// GET    /kyc                          -> list_pending_kyc
/// PUT    /kyc/{user_id}                -> decide_kyc
/// PUT    /projects/{id}/status         -> set_project_status
/// POST   /projects/{id}/approve        -> approve_project
/// POST   /projects/{id}/reject         -> reject_project
/// POST   /projects/{id}/mint           -> mint_tokens
/// POST   /projects/{id}/force-funding  -> force_full_funding
/// POST   /projects/{id}/release        -> release_funds
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kyc", get(kyc::list_pending_kyc))
        .route("/kyc/{user_id}", put(kyc::decide_kyc))
        .route("/projects/{id}/status", put(admin::set_project_status))
        .route("/projects/{id}/approve", post(admin::approve_project))
        .route("/projects/{id}/reject", post(admin::reject_project))
        .route("/projects/{id}/mint", post(admin::mint_tokens))
        .route("/projects/{id}/force-funding", post(admin::force_full_funding))
        .route("/projects/{id}/release", post(admin::release_funds))
}
