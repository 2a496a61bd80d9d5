//! Trend counter persistence in a remote document store.
//!
//! The store is reached through the [`DocumentStore`] trait. [`AppwriteStore`]
//! speaks the Appwrite databases REST API; [`MemoryStore`] keeps documents
//! in-process. [`TrendRepo`](repositories::TrendRepo) holds the counter
//! queries and [`TrendStore`] wraps them with the swallow-and-log error
//! policy the UI relies on.

pub mod appwrite;
pub mod memory;
pub mod models;
pub mod query;
pub mod repositories;
pub mod store;
pub mod trends;

pub use appwrite::{AppwriteConfig, AppwriteStore};
pub use memory::MemoryStore;
pub use query::Query;
pub use store::{DocumentStore, StoreError};
pub use trends::TrendStore;
