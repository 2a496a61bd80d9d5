use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinetrend_core::error::FetchError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The movie catalog could not serve the request.
    #[error(transparent)]
    Catalog(#[from] FetchError),

    /// A page template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Catalog(err) => {
                tracing::warn!(error = %err, "Catalog request failed");
                (StatusCode::BAD_GATEWAY, "CATALOG_ERROR", err.user_message())
            }
            AppError::Render(err) => {
                tracing::error!(error = %err, "Template render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "Failed to render page".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
