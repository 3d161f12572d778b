//! Session-based authentication extractor for Axum handlers.
//!
//! The platform has a single active session (the `aethera_session` blob),
//! like a browser tab holding one logged-in user.

use aethera_core::error::CoreError;
use aethera_core::roles::UserRole;
use aethera_db::models::user::User;
use aethera_db::repositories::{SessionRepo, UserRepo};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// The logged-in user, freshly read from the user directory.
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %auth.user.id, role = %auth.user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.user.id
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = SessionRepo::current(&state.store)
            .await
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not logged in".into())))?;

        // The session blob is a snapshot; KYC and wallet changes live in
        // the user directory.
        let user = UserRepo::find_by_id(&state.store, &session.id)
            .await
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Session user no longer exists".into(),
                ))
            })?;

        Ok(AuthUser { user })
    }
}
