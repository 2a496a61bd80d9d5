//! WebSocket infrastructure for the live search page.
//!
//! Provides connection tracking, heartbeat pings, the wire messages, and
//! the HTTP upgrade handler that attaches a search session to each socket.

mod handler;
mod heartbeat;
pub mod manager;
pub mod messages;

pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
pub use messages::{ClientMessage, FrameError, ServerMessage};
