use axum::extract::{Query, State};
use axum::Json;
use cinetrend_core::trending::clamp_trending_limit;
use cinetrend_core::types::TrendCounter;

use crate::query::TrendingParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trending?limit=
///
/// Never fails: store errors yield an empty list.
pub async fn list_trending(
    State(state): State<AppState>,
    Query(params): Query<TrendingParams>,
) -> Json<DataResponse<Vec<TrendCounter>>> {
    let limit = clamp_trending_limit(params.limit);
    let counters = state.trends.top_trending(limit).await;
    Json(DataResponse { data: counters })
}
