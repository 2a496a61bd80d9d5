//! In-process [`DocumentStore`].
//!
//! Evaluates the same [`Query`] clauses the Appwrite backend sends, so trend
//! logic behaves identically against either. Nothing is persisted.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::query::Query;
use crate::store::{DocumentStore, StoreError};

/// Page size applied when no `Limit` clause is given (Appwrite's default).
const DEFAULT_LIST_LIMIT: usize = 25;

/// Documents held in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Copy of every document, in insertion order.
    pub async fn snapshot(&self) -> Vec<Value> {
        self.documents.read().await.clone()
    }
}

fn matches(doc: &Value, queries: &[Query]) -> bool {
    queries.iter().all(|q| match q {
        Query::Equal { attribute, value } => doc.get(attribute) == Some(value),
        Query::OrderDesc { .. } | Query::Limit(_) => true,
    })
}

fn numeric(doc: &Value, attribute: &str) -> f64 {
    doc.get(attribute).and_then(Value::as_f64).unwrap_or(f64::MIN)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_documents(&self, queries: &[Query]) -> Result<Vec<Value>, StoreError> {
        let mut found: Vec<Value> = self
            .documents
            .read()
            .await
            .iter()
            .filter(|doc| matches(doc, queries))
            .cloned()
            .collect();

        for q in queries {
            if let Query::OrderDesc { attribute } = q {
                found.sort_by(|a, b| {
                    numeric(b, attribute)
                        .partial_cmp(&numeric(a, attribute))
                        .unwrap_or(Ordering::Equal)
                });
            }
        }

        let limit = queries
            .iter()
            .find_map(|q| match q {
                Query::Limit(n) => Some(*n),
                _ => None,
            })
            .unwrap_or(DEFAULT_LIST_LIMIT);
        found.truncate(limit);

        Ok(found)
    }

    async fn create_document(&self, data: Value) -> Result<Value, StoreError> {
        let mut doc = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        doc.insert(
            "$id".to_string(),
            Value::String(uuid::Uuid::new_v4().simple().to_string()),
        );
        let doc = Value::Object(doc);

        self.documents.write().await.push(doc.clone());
        Ok(doc)
    }

    async fn update_document(&self, id: &str, data: Value) -> Result<Value, StoreError> {
        let mut docs = self.documents.write().await;
        let doc = docs
            .iter_mut()
            .find(|d| d.get("$id").and_then(Value::as_str) == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let (Value::Object(target), Value::Object(fields)) = (&mut *doc, data) {
            for (key, value) in fields {
                if key != "$id" {
                    target.insert(key, value);
                }
            }
        }
        Ok(doc.clone())
    }
}
