//! Trending constants and term helpers.

/// Number of counters shown in the trending section.
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Upper bound accepted by the JSON trending endpoint.
pub const MAX_TRENDING_LIMIT: usize = 25;

/// Whether a search term is empty or whitespace-only.
///
/// Blank terms are never recorded.
pub fn is_blank_term(term: &str) -> bool {
    term.trim().is_empty()
}

/// Clamp a user-provided trending limit to `1..=MAX_TRENDING_LIMIT`.
pub fn clamp_trending_limit(limit: Option<usize>) -> usize {
    limit
        .unwrap_or(DEFAULT_TRENDING_LIMIT)
        .clamp(1, MAX_TRENDING_LIMIT)
}
