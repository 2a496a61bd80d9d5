/// User-facing message for every catalog failure that does not carry its own.
pub const GENERIC_FETCH_ERROR: &str = "Error fetching movies. Please try again later.";

/// Fallback message when the catalog flags a failure without an `Error` text.
pub const API_ERROR_FALLBACK: &str = "Failed to fetch movies";

/// Failures from a catalog fetch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The catalog answered with a non-2xx status.
    #[error("Catalog returned HTTP {status}")]
    Http { status: u16 },

    /// A well-formed response that signals a logical failure.
    #[error("Catalog API error: {0}")]
    Api(String),

    /// The body could not be decoded as a catalog response.
    #[error("Malformed catalog response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Message shown to the user.
    ///
    /// Only `Api` errors expose their own text; all other kinds collapse to
    /// [`GENERIC_FETCH_ERROR`].
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Api(msg) => msg.clone(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}
