use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use fundamentals_core::financials::CacheStatus;

use crate::main_lib::AppState;

#[utoipa::path(
    get,
    path = "/api/cache/status",
    responses((status = 200, description = "State of the full-table cache entry"))
)]
pub(crate) async fn cache_status(State(state): State<Arc<AppState>>) -> Json<CacheStatus> {
    Json(state.financials_service.cache_status())
}

#[derive(Serialize)]
pub(crate) struct CacheClearedResponse {
    message: &'static str,
}

// Clearing mutates state, so only POST is routed.
#[utoipa::path(
    post,
    path = "/api/cache/clear",
    responses((status = 200, description = "Cache cleared"))
)]
pub(crate) async fn clear_cache(State(state): State<Arc<AppState>>) -> Json<CacheClearedResponse> {
    state.financials_service.clear_cache();
    Json(CacheClearedResponse {
        message: "Cache cleared",
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cache/status", get(cache_status))
        .route("/cache/clear", post(clear_cache))
}
