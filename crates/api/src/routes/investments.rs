use axum::routing::get;
use axum::Router;

use crate::handlers::investments;
use crate::state::AppState;

/// Routes mounted at `/investments`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(investments::list_my_investments))
}
