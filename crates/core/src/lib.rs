//! Domain types and pure logic shared by the catalog client, the trend store
//! and the web layer.
//!
//! This crate has no internal dependencies so every other crate in the
//! workspace can depend on it.

pub mod card;
pub mod debounce;
pub mod error;
pub mod trending;
pub mod types;
