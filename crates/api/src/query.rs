//! Query parameter types for API handlers.

use serde::Deserialize;

/// `?query=` for the movie search endpoint. Missing means the popular list.
#[derive(Debug, Deserialize)]
pub struct MovieSearchParams {
    #[serde(default)]
    pub query: String,
}

/// `?limit=` for the trending endpoint, clamped by the handler.
#[derive(Debug, Deserialize)]
pub struct TrendingParams {
    pub limit: Option<usize>,
}
