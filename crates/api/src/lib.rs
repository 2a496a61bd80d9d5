//! CineTrend web server library.
//!
//! Exposes the building blocks (config, state, routes, search sessions,
//! views, WebSocket infrastructure) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;
pub mod view;
pub mod ws;
