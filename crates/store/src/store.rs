use async_trait::async_trait;
use serde_json::Value;

use crate::query::Query;

/// Errors from any document store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("Store error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A document did not have the expected shape.
    #[error("Malformed document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Update of a document id that does not exist.
    #[error("Document not found: {0}")]
    NotFound(String),
}

/// A single collection of JSON documents.
///
/// Documents are JSON objects carrying their id under `$id`, matching the
/// Appwrite wire format.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List documents matching all `queries`.
    async fn list_documents(&self, queries: &[Query]) -> Result<Vec<Value>, StoreError>;

    /// Insert a new document with a store-generated id.
    async fn create_document(&self, data: Value) -> Result<Value, StoreError>;

    /// Merge `data` into the document `id`.
    async fn update_document(&self, id: &str, data: Value) -> Result<Value, StoreError>;
}
