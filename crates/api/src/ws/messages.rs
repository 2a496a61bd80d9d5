//! JSON frames exchanged with the page script.

use serde::{Deserialize, Serialize};

use crate::session::ScreenState;
use crate::view;

/// Frames sent by the browser.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Current contents of the search box, sent on every keystroke.
    Query { value: String },
}

/// Frames sent to the browser.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Replacement HTML for the trending and results regions.
    Render { trending: String, movies: String },
}

/// Why a render frame could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("render failed: {0}")]
    Render(#[from] minijinja::Error),
    #[error("encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ServerMessage {
    pub fn render(screen: &ScreenState) -> Result<Self, minijinja::Error> {
        Ok(Self::Render {
            trending: view::render_trending(&screen.trending)?,
            movies: view::render_movies(screen)?,
        })
    }

    /// Render `screen` and serialize it as a JSON text frame payload.
    pub fn encode(screen: &ScreenState) -> Result<String, FrameError> {
        Ok(serde_json::to_string(&Self::render(screen)?)?)
    }
}
