//! Movie catalog REST client.
//!
//! [`CatalogApi`] talks to the TMDB v3 HTTP API (search and discover
//! endpoints) using [`reqwest`]. Consumers depend on the [`MovieCatalog`]
//! trait so tests and sessions can swap in other implementations.

pub mod api;
pub mod response;

use async_trait::async_trait;
use cinetrend_core::error::FetchError;
use cinetrend_core::types::Movie;

pub use api::CatalogApi;

/// Default catalog base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// A source of movie search results.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search for `query`, or list popular movies when `query` is empty.
    async fn search(&self, query: &str) -> Result<Vec<Movie>, FetchError>;
}
