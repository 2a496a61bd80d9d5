use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Mount the HTML page at `/`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(handlers::page::index))
}
