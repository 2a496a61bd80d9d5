//! Display rules for movie cards.
//!
//! Kept free of any markup so the same rules back both the HTML view and the
//! trend counter's stored poster URL.

use crate::types::Movie;

/// Base URL for poster images (w500 rendition).
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Image shown when a movie has no poster.
pub const PLACEHOLDER_POSTER: &str = "/no-movie.png";

/// Label used for any missing value on a card.
pub const NOT_AVAILABLE: &str = "N/A";

/// Expand a catalog poster path into a full image URL.
///
/// ```
/// use cinetrend_core::card::poster_url;
/// assert_eq!(poster_url("/x.jpg"), "https://image.tmdb.org/t/p/w500/x.jpg");
/// ```
pub fn poster_url(poster_path: &str) -> String {
    if poster_path.starts_with('/') {
        format!("{POSTER_BASE_URL}{poster_path}")
    } else {
        format!("{POSTER_BASE_URL}/{poster_path}")
    }
}

/// Image source for a card: the poster URL, or the placeholder.
pub fn poster_src(movie: &Movie) -> String {
    match movie.poster_path.as_deref() {
        Some(path) if !path.is_empty() => poster_url(path),
        _ => PLACEHOLDER_POSTER.to_string(),
    }
}

/// Rating with one decimal digit, ties rounded up (`7.25` shows `7.3`).
///
/// A missing rating and a zero rating (the catalog's "no votes") both render
/// as `N/A`.
pub fn rating_label(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(v) if v != 0.0 && v.is_finite() => format!("{:.1}", (v * 10.0).round() / 10.0),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Release year: everything before the first `-` of the date.
pub fn release_year(release_date: Option<&str>) -> String {
    match release_date {
        Some(date) if !date.is_empty() => date.split('-').next().unwrap_or(date).to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Original language code, or `N/A`.
pub fn language_label(original_language: Option<&str>) -> String {
    match original_language {
        Some(lang) if !lang.is_empty() => lang.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
