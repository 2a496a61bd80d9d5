//! Appwrite databases REST backend.
//!
//! Targets `{endpoint}/databases/{database_id}/collections/{collection_id}/documents`
//! and authenticates with the project header plus an optional server API key.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::query::Query;
use crate::store::{DocumentStore, StoreError};

/// Default Appwrite Cloud endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

/// Document id that asks Appwrite to generate one.
const UNIQUE_ID: &str = "unique()";

/// HTTP request timeout for a single store call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection parameters for one Appwrite collection.
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    /// API endpoint including the version segment, e.g. `https://cloud.appwrite.io/v1`.
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    /// Server API key; `None` relies on the collection's public permissions.
    pub api_key: Option<String>,
}

/// Body of a list-documents response.
#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<Value>,
}

/// [`DocumentStore`] backed by an Appwrite collection.
pub struct AppwriteStore {
    client: reqwest::Client,
    config: AppwriteConfig,
}

impl AppwriteStore {
    pub fn new(config: AppwriteConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self::with_client(client, config)
    }

    /// Create a store reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: AppwriteConfig) -> Self {
        Self { client, config }
    }

    /// URL of the collection's documents resource.
    pub fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint.trim_end_matches('/'),
            self.config.database_id,
            self.config.collection_id,
        )
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header("X-Appwrite-Project", &self.config.project_id);
        match &self.config.api_key {
            Some(key) => builder.header("X-Appwrite-Key", key),
            None => builder,
        }
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, capturing the body
    /// otherwise.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl DocumentStore for AppwriteStore {
    async fn list_documents(&self, queries: &[Query]) -> Result<Vec<Value>, StoreError> {
        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|q| ("queries[]", q.to_string()))
            .collect();

        let response = self
            .request(reqwest::Method::GET, self.documents_url())
            .query(&params)
            .send()
            .await?;

        let list: DocumentList = Self::parse_response(response).await?;
        Ok(list.documents)
    }

    async fn create_document(&self, data: Value) -> Result<Value, StoreError> {
        let body = json!({
            "documentId": UNIQUE_ID,
            "data": data,
        });

        let response = self
            .request(reqwest::Method::POST, self.documents_url())
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn update_document(&self, id: &str, data: Value) -> Result<Value, StoreError> {
        let body = json!({ "data": data });

        let response = self
            .request(
                reqwest::Method::PATCH,
                format!("{}/{}", self.documents_url(), id),
            )
            .json(&body)
            .send()
            .await?;

        match Self::parse_response(response).await {
            Err(StoreError::Status { status: 404, .. }) => Err(StoreError::NotFound(id.to_string())),
            other => other,
        }
    }
}
