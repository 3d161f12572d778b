use axum::routing::post;
use axum::Router;

use crate::handlers::wallet;
use crate::state::AppState;

/// Routes mounted at `/wallet`.
pub fn router() -> Router<AppState> {
    Router::new().route("/connect", post(wallet::connect_wallet))
}
