use cinetrend_core::card::poster_url;
use cinetrend_core::types::{Movie, MovieId, TrendCounter};
use serde::{Deserialize, Serialize};

/// Attribute holding the unique search term.
pub const SEARCH_TERM_ATTR: &str = "searchTerm";

/// Attribute holding the search count.
pub const COUNT_ATTR: &str = "count";

/// A trend counter as stored in the collection.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendDocument {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub count: i64,
    #[serde(default)]
    pub movie_id: Option<MovieId>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl From<TrendDocument> for TrendCounter {
    fn from(doc: TrendDocument) -> Self {
        TrendCounter {
            id: doc.id,
            search_term: doc.search_term,
            count: doc.count,
            movie_id: doc.movie_id,
            poster_url: doc.poster_url.unwrap_or_default(),
        }
    }
}

/// Payload for the first search of a term.
#[derive(Debug, Serialize)]
pub struct NewTrendDocument<'a> {
    #[serde(rename = "searchTerm")]
    pub search_term: &'a str,
    pub count: i64,
    pub movie_id: Option<MovieId>,
    pub poster_url: String,
}

impl<'a> NewTrendDocument<'a> {
    /// Counter for `term` with `count = 1`, referencing the top result.
    pub fn first_search(term: &'a str, movie: &Movie) -> Self {
        Self {
            search_term: term,
            count: 1,
            movie_id: Some(movie.id),
            poster_url: movie
                .poster_path
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(poster_url)
                .unwrap_or_default(),
        }
    }
}
