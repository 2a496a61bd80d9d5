//! Typed document queries.
//!
//! Serialized in Appwrite's JSON query syntax, e.g.
//! `{"method":"equal","attribute":"searchTerm","values":["dune"]}`.

use serde_json::{json, Value};

/// A filter, ordering or paging clause for [`list_documents`].
///
/// [`list_documents`]: crate::DocumentStore::list_documents
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Attribute equals the value.
    Equal { attribute: String, value: Value },
    /// Order by attribute, largest first.
    OrderDesc { attribute: String },
    /// Return at most this many documents.
    Limit(usize),
}

impl Query {
    pub fn equal(attribute: &str, value: impl Into<Value>) -> Self {
        Query::Equal {
            attribute: attribute.to_string(),
            value: value.into(),
        }
    }

    pub fn order_desc(attribute: &str) -> Self {
        Query::OrderDesc {
            attribute: attribute.to_string(),
        }
    }

    pub fn limit(limit: usize) -> Self {
        Query::Limit(limit)
    }

    /// JSON form sent in `queries[]` parameters.
    pub fn to_json(&self) -> Value {
        match self {
            Query::Equal { attribute, value } => json!({
                "method": "equal",
                "attribute": attribute,
                "values": [value],
            }),
            Query::OrderDesc { attribute } => json!({
                "method": "orderDesc",
                "attribute": attribute,
            }),
            Query::Limit(limit) => json!({
                "method": "limit",
                "values": [limit],
            }),
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
