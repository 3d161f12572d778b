use axum::routing::post;
use axum::Router;

use crate::handlers::kyc;
use crate::state::AppState;

/// Routes mounted at `/kyc`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(kyc::submit_kyc))
}
