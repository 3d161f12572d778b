//! Handlers for login, logout and the current session.

use aethera_core::error::CoreError;
use aethera_core::roles::UserRole;
use aethera_db::models::user::LoginRequest;
use aethera_db::repositories::SessionRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /auth/login
// ---------------------------------------------------------------------------

/// Log in as the given email and role, auto-registering demo accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;
    let role = UserRole::from_str_db(&input.role)?;

    let user = SessionRepo::login(&state.store, &input.email, role).await?;

    Ok(Json(DataResponse { data: user }))
}

// ---------------------------------------------------------------------------
// POST /auth/logout
// ---------------------------------------------------------------------------

pub async fn logout(State(state): State<AppState>) -> AppResult<StatusCode> {
    SessionRepo::logout(&state.store).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /auth/me
// ---------------------------------------------------------------------------

pub async fn me(auth: AuthUser) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse { data: auth.user }))
}
