use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use fundamentals_core::financials::FinancialRecord;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct FinancialsQuery {
    #[serde(default)]
    force_refresh: bool,
}

#[utoipa::path(
    get,
    path = "/api/financials",
    params(("force_refresh" = Option<bool>, Query, description = "Force refresh cache")),
    responses((status = 200, description = "All financial-statement records"))
)]
pub(crate) async fn get_financials(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FinancialsQuery>,
) -> ApiResult<Json<Vec<FinancialRecord>>> {
    let records = state
        .financials_service
        .get_financials(query.force_refresh)
        .await?;
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/financials/{ticker}",
    params(("ticker" = String, Path, description = "Ticker symbol, matched case-insensitively")),
    responses((status = 200, description = "Records for one ticker, restricted projection"))
)]
pub(crate) async fn get_financials_by_ticker(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FinancialRecord>>> {
    let records = state
        .financials_service
        .get_financials_by_ticker(&ticker)
        .await?;
    Ok(Json(records))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/financials", get(get_financials))
        .route("/financials/{ticker}", get(get_financials_by_ticker))
}
