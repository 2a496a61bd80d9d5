//! Query layer over [`DocumentStore`](crate::DocumentStore) collections.

pub mod trend_repo;

pub use trend_repo::TrendRepo;
