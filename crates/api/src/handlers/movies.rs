//! JSON movie search.

use axum::extract::{Query, State};
use axum::Json;
use cinetrend_core::types::Movie;

use crate::error::AppResult;
use crate::query::MovieSearchParams;
use crate::response::DataResponse;
use crate::session::search::run_search;
use crate::state::AppState;

/// GET /api/v1/movies?query=
///
/// Same path as a settled query in a session, including the background
/// trend write. Catalog failures map to 502.
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieSearchParams>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = run_search(state.catalog.as_ref(), &state.trends, &params.query).await?;

    tracing::debug!(query = %params.query, results = movies.len(), "Movie search served");

    Ok(Json(DataResponse { data: movies }))
}
