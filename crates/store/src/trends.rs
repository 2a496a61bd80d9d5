//! Trend store facade used by the web layer.
//!
//! Wraps [`TrendRepo`] so neither operation ever surfaces an error: failures
//! are logged and become a no-op or an empty list.

use std::sync::Arc;

use cinetrend_core::types::{Movie, TrendCounter};
use tokio::task::JoinHandle;

use crate::repositories::TrendRepo;
use crate::store::DocumentStore;

/// Shared handle to the trend counter collection.
#[derive(Clone)]
pub struct TrendStore {
    store: Arc<dyn DocumentStore>,
}

impl TrendStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Record one successful search. Errors are logged and swallowed.
    pub async fn record_search(&self, term: &str, movie: &Movie) {
        match TrendRepo::record_search(self.store.as_ref(), term, movie).await {
            Ok(Some(doc)) => {
                tracing::debug!(term, count = doc.count, "Recorded search");
            }
            Ok(None) => {
                tracing::trace!("Skipped blank search term");
            }
            Err(e) => {
                tracing::error!(term, error = %e, "Failed to record search");
            }
        }
    }

    /// Spawn [`record_search`](Self::record_search) without awaiting it.
    ///
    /// The handle may be dropped; the write completes on its own.
    pub fn spawn_record(&self, term: String, movie: Movie) -> JoinHandle<()> {
        let trends = self.clone();
        tokio::spawn(async move {
            trends.record_search(&term, &movie).await;
        })
    }

    /// Top `limit` counters, or an empty list if the store fails.
    pub async fn top_trending(&self, limit: usize) -> Vec<TrendCounter> {
        match TrendRepo::top(self.store.as_ref(), limit).await {
            Ok(counters) => counters,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load trending searches");
                Vec::new()
            }
        }
    }
}
