//! REST API client for the catalog's search and discover endpoints.

use std::time::Duration;

use async_trait::async_trait;
use cinetrend_core::error::FetchError;
use cinetrend_core::types::Movie;
use reqwest::header::ACCEPT;

use crate::response::parse_body;
use crate::MovieCatalog;

/// HTTP request timeout for a single catalog call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the movie catalog.
pub struct CatalogApi {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl CatalogApi {
    /// Create a client for the catalog at `base_url`.
    ///
    /// * `base_url`  - e.g. `https://api.themoviedb.org/3` (no trailing slash).
    /// * `api_token` - bearer token; `None` sends unauthenticated requests,
    ///   which the catalog rejects.
    pub fn new(base_url: String, api_token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self::with_client(client, base_url, api_token)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String, api_token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is configured.
    pub fn has_token(&self) -> bool {
        self.api_token.is_some()
    }

    /// Build the GET request for `query`.
    ///
    /// An empty query targets `/discover/movie` sorted by popularity; anything
    /// else targets `/search/movie` with the query percent-encoded.
    pub fn build_request(&self, query: &str) -> Result<reqwest::Request, reqwest::Error> {
        let builder = if query.is_empty() {
            self.client
                .get(format!("{}/discover/movie", self.base_url))
                .query(&[("sort_by", "popularity.desc")])
        } else {
            self.client
                .get(format!("{}/search/movie", self.base_url))
                .query(&[("query", query)])
        };

        let builder = builder.header(ACCEPT, "application/json");
        let builder = match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        builder.build()
    }

    /// Fetch movies for `query`.
    pub async fn fetch(&self, query: &str) -> Result<Vec<Movie>, FetchError> {
        let request = self
            .build_request(query)
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), query, "Catalog returned error status");
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let movies = parse_body(&body)?;
        tracing::debug!(query, results = movies.len(), "Catalog fetch complete");
        Ok(movies)
    }
}

#[async_trait]
impl MovieCatalog for CatalogApi {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, FetchError> {
        self.fetch(query).await
    }
}
