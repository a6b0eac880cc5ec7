use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use fundamentals_core::financials::TickerSummary;

use crate::{error::ApiResult, main_lib::AppState};

#[utoipa::path(
    get,
    path = "/api/tickers",
    responses((status = 200, description = "One entry per distinct ticker symbol"))
)]
pub(crate) async fn list_tickers(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TickerSummary>>> {
    let tickers = state.financials_service.list_tickers().await?;
    Ok(Json(tickers))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/tickers", get(list_tickers))
}
