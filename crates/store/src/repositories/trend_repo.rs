//! Repository for the trend counter collection.
//!
//! Recording a search is a read-then-write: look the term up, then either
//! update the found document with `count + 1` or create a new one. It is not
//! atomic, so concurrent searches for the same term can under-count or
//! create duplicate rows.

use cinetrend_core::trending::is_blank_term;
use cinetrend_core::types::{Movie, TrendCounter};
use serde_json::json;

use crate::models::trend::{NewTrendDocument, TrendDocument, COUNT_ATTR, SEARCH_TERM_ATTR};
use crate::query::Query;
use crate::store::{DocumentStore, StoreError};

/// Provides counter lookups and updates for trending searches.
pub struct TrendRepo;

impl TrendRepo {
    /// Find the counter for an exact term.
    pub async fn find_by_term(
        store: &dyn DocumentStore,
        term: &str,
    ) -> Result<Option<TrendDocument>, StoreError> {
        let docs = store
            .list_documents(&[Query::equal(SEARCH_TERM_ATTR, term)])
            .await?;

        docs.into_iter()
            .next()
            .map(serde_json::from_value)
            .transpose()
            .map_err(StoreError::from)
    }

    /// Write `count + 1` back to an existing counter.
    pub async fn increment(
        store: &dyn DocumentStore,
        doc: &TrendDocument,
    ) -> Result<TrendDocument, StoreError> {
        let updated = store
            .update_document(&doc.id, json!({ COUNT_ATTR: doc.count + 1 }))
            .await?;
        Ok(serde_json::from_value(updated)?)
    }

    /// Create the counter for a first search of `term`.
    pub async fn create(
        store: &dyn DocumentStore,
        term: &str,
        movie: &Movie,
    ) -> Result<TrendDocument, StoreError> {
        let data = serde_json::to_value(NewTrendDocument::first_search(term, movie))?;
        let created = store.create_document(data).await?;
        Ok(serde_json::from_value(created)?)
    }

    /// Count one successful search of `term`, whose top result was `movie`.
    ///
    /// Blank terms are ignored and return `Ok(None)`.
    pub async fn record_search(
        store: &dyn DocumentStore,
        term: &str,
        movie: &Movie,
    ) -> Result<Option<TrendDocument>, StoreError> {
        if is_blank_term(term) {
            return Ok(None);
        }

        let doc = match Self::find_by_term(store, term).await? {
            Some(existing) => Self::increment(store, &existing).await?,
            None => Self::create(store, term, movie).await?,
        };
        Ok(Some(doc))
    }

    /// Up to `limit` counters, highest count first.
    ///
    /// Order among equal counts is whatever the store returns.
    pub async fn top(
        store: &dyn DocumentStore,
        limit: usize,
    ) -> Result<Vec<TrendCounter>, StoreError> {
        let docs = store
            .list_documents(&[Query::limit(limit), Query::order_desc(COUNT_ATTR)])
            .await?;

        docs.into_iter()
            .map(|d| serde_json::from_value::<TrendDocument>(d).map(TrendCounter::from))
            .collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::from)
    }
}
