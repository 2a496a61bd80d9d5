use axum::response::Html;

use crate::error::AppResult;
use crate::session::ScreenState;
use crate::view;

/// GET /
///
/// Serves the page shell. Trending and results arrive over the WebSocket
/// once the page's session starts.
pub async fn index() -> AppResult<Html<String>> {
    Ok(Html(view::render_page(&ScreenState::default())?))
}
