pub mod admin;
pub mod auth;
pub mod health;
pub mod investments;
pub mod kyc;
pub mod projects;
pub mod wallet;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
/// /auth/logout                                 logout (public)
/// /auth/me                                     current user
///
/// /projects                                    list (role-scoped), create (installer)
/// /projects/{id}                               get (role-scoped)
/// /projects/{id}/invest                        invest via mock chain (investor)
///
/// /kyc                                         submit KYC (installer)
/// /wallet/connect                              connect mock wallet
/// /investments                                 own portfolio (investor)
///
/// /admin/kyc                                   pending KYC submissions
/// /admin/kyc/{user_id}                         approve / reject KYC (PUT)
/// /admin/projects/{id}/status                  generic status change (PUT)
/// /admin/projects/{id}/approve                 approve for tokenization
/// /admin/projects/{id}/reject                  reject
/// /admin/projects/{id}/mint                    mint tokens, go live
/// /admin/projects/{id}/force-funding           simulate full funding
/// /admin/projects/{id}/release                 disburse escrow
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", projects::router())
        .nest("/kyc", kyc::router())
        .nest("/wallet", wallet::router())
        .nest("/investments", investments::router())
        .nest("/admin", admin::router())
}
