use serde::{Deserialize, Serialize};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Catalog movie identifier.
pub type MovieId = i64;

/// A movie record as returned by the catalog API.
///
/// Only `id` and `title` are guaranteed; every other field may be missing or
/// `null` in the upstream JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
}

/// Per-search-term counter held in the document store.
///
/// The application only ever holds transient copies; the store owns the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendCounter {
    /// Store-assigned document id.
    pub id: String,
    /// Exact search term (case-sensitive, unnormalized).
    pub search_term: String,
    /// Number of successful searches recorded for the term.
    pub count: i64,
    /// Top result of the first search that created the row.
    pub movie_id: Option<MovieId>,
    /// Full poster URL of that movie, or empty.
    pub poster_url: String,
}
