pub mod health;
pub mod page;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws                    WebSocket search session
/// /movies?query=         search, or popular list when query is empty
/// /trending?limit=       top trend counters
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .route("/movies", get(handlers::movies::search_movies))
        .route("/trending", get(handlers::trending::list_trending))
}
