//! Decoding of catalog response bodies.

use cinetrend_core::error::{FetchError, API_ERROR_FALLBACK};
use cinetrend_core::types::Movie;
use serde::Deserialize;

/// Envelope of a search or discover response.
///
/// `Response` / `Error` are the API-level failure indicator some catalog
/// deployments return with a 200 status.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl CatalogResponse {
    /// Whether the body flags a logical failure.
    pub fn is_failure(&self) -> bool {
        self.response.as_deref() == Some("False")
    }

    /// Convert into the movie list, or the API error it carries.
    pub fn into_movies(self) -> Result<Vec<Movie>, FetchError> {
        if self.is_failure() {
            let message = self
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| API_ERROR_FALLBACK.to_string());
            return Err(FetchError::Api(message));
        }
        Ok(self.results.unwrap_or_default())
    }
}

/// Decode a 2xx response body into movies.
pub fn parse_body(body: &[u8]) -> Result<Vec<Movie>, FetchError> {
    let response: CatalogResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    response.into_movies()
}
