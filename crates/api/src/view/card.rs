use cinetrend_core::card::{language_label, poster_src, rating_label, release_year};
use cinetrend_core::types::Movie;
use serde::Serialize;

/// Display values for one result card, fed to the `movie_card` macro.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub title: String,
    pub poster: String,
    pub rating: String,
    pub language: String,
    pub year: String,
}

impl From<&Movie> for CardView {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            poster: poster_src(movie),
            rating: rating_label(movie.vote_average),
            language: language_label(movie.original_language.as_deref()),
            year: release_year(movie.release_date.as_deref()),
        }
    }
}
