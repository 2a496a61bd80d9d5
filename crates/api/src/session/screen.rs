//! Screen state of one search session.

use cinetrend_core::error::FetchError;
use cinetrend_core::types::{Movie, TrendCounter};
use serde::Serialize;

/// Where the main list is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Everything the view renders, owned by the session task.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenState {
    /// Last settled query.
    pub query: String,
    pub status: Status,
    pub movies: Vec<Movie>,
    pub error_message: Option<String>,
    pub trending: Vec<TrendCounter>,
}

impl ScreenState {
    /// Enter `Loading` for a newly settled query and clear any error.
    pub fn begin_search(&mut self, query: &str) {
        self.query = query.to_string();
        self.status = Status::Loading;
        self.error_message = None;
    }

    /// Apply a fetch outcome.
    ///
    /// Outcomes are applied in arrival order without checking which query
    /// they belong to, so a slow older response can replace newer results.
    pub fn finish_search(&mut self, result: Result<Vec<Movie>, FetchError>) {
        match result {
            Ok(movies) => {
                self.movies = movies;
                self.error_message = None;
                self.status = Status::Success;
            }
            Err(err) => {
                self.movies.clear();
                self.error_message = Some(err.user_message());
                self.status = Status::Error;
            }
        }
    }

    pub fn set_trending(&mut self, trending: Vec<TrendCounter>) {
        self.trending = trending;
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }
}
