//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not match.

use aethera_core::error::CoreError;
use aethera_core::roles::UserRole;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

async fn require_role(
    parts: &mut Parts,
    state: &AppState,
    role: UserRole,
    message: &str,
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    if user.role() != role {
        return Err(AppError::Core(CoreError::Forbidden(message.into())));
    }
    Ok(user)
}

/// Requires the `ADMIN` role. Rejects with 403 Forbidden otherwise.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_role(parts, state, UserRole::Admin, "Admin role required")
            .await
            .map(RequireAdmin)
    }
}

/// Requires the `INSTALLER` role.
pub struct RequireInstaller(pub AuthUser);

impl FromRequestParts<AppState> for RequireInstaller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_role(parts, state, UserRole::Installer, "Installer role required")
            .await
            .map(RequireInstaller)
    }
}

/// Requires the `INVESTOR` role.
pub struct RequireInvestor(pub AuthUser);

impl FromRequestParts<AppState> for RequireInvestor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_role(parts, state, UserRole::Investor, "Investor role required")
            .await
            .map(RequireInvestor)
    }
}
