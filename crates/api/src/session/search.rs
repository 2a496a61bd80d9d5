//! One catalog search plus its background trend write.

use cinetrend_catalog::MovieCatalog;
use cinetrend_core::error::FetchError;
use cinetrend_core::types::Movie;
use cinetrend_store::TrendStore;

/// Search the catalog for `query`.
///
/// When `query` is non-empty and at least one movie comes back, the search
/// is recorded against the top result in a spawned task that is never
/// awaited; its outcome cannot affect the returned list.
pub async fn run_search(
    catalog: &dyn MovieCatalog,
    trends: &TrendStore,
    query: &str,
) -> Result<Vec<Movie>, FetchError> {
    let movies = catalog.search(query).await.inspect_err(|e| {
        tracing::warn!(query, error = %e, "Catalog search failed");
    })?;

    if !query.is_empty() {
        if let Some(top) = movies.first() {
            trends.spawn_record(query.to_string(), top.clone());
        }
    }

    Ok(movies)
}
