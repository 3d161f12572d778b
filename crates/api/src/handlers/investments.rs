use aethera_db::repositories::InvestmentRepo;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::rbac::RequireInvestor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /investments -- the investor's own portfolio, oldest first.
pub async fn list_my_investments(
    RequireInvestor(investor): RequireInvestor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let investments = InvestmentRepo::list_by_investor(&state.store, investor.id()).await;
    Ok(Json(DataResponse { data: investments }))
}
