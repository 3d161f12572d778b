use aethera_db::repositories::UserRepo;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /wallet/connect -- connect a mock wallet and attach it to the user.
pub async fn connect_wallet(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let address = state.chain.connect_wallet().await;
    let user = UserRepo::set_wallet(&state.store, auth.id(), &address).await?;

    tracing::info!(user_id = %user.id, wallet = %address, "Wallet connected");

    Ok(Json(DataResponse { data: user }))
}
