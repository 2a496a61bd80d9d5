#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cinetrend_api::config::{CatalogConfig, ServerConfig, StoreConfig};
use cinetrend_api::router::build_app_router;
use cinetrend_api::state::AppState;
use cinetrend_api::ws::WsManager;
use cinetrend_catalog::MovieCatalog;
use cinetrend_core::error::FetchError;
use cinetrend_core::types::Movie;
use cinetrend_store::{MemoryStore, TrendStore};

/// The one cross-origin caller the test config allows.
pub const ALLOWED_ORIGIN: &str = "https://dashboard.cinetrend.test";

/// Build a test `ServerConfig` with safe defaults and a short debounce.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![ALLOWED_ORIGIN.to_string()],
        request_timeout_secs: 30,
        debounce_ms: 50,
        catalog: CatalogConfig {
            base_url: "http://catalog.invalid".to_string(),
            api_token: None,
        },
        store: StoreConfig::Memory,
    }
}

/// Catalog double: one movie per query, or a fixed failure.
#[derive(Default)]
pub struct StubCatalog {
    pub failure: Option<FetchError>,
    pub calls: Mutex<Vec<String>>,
}

impl StubCatalog {
    pub fn failing(err: FetchError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }
}

pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/{id}.jpg")),
        vote_average: Some(7.5),
        release_date: Some("2021-10-22".to_string()),
        original_language: Some("en".to_string()),
    }
}

#[async_trait]
impl MovieCatalog for StubCatalog {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, FetchError> {
        self.calls.lock().unwrap().push(query.to_string());
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let title = if query.is_empty() {
            "Popular Pick".to_string()
        } else {
            format!("{query} (film)")
        };
        Ok(vec![movie(42, &title)])
    }
}

/// Everything a test needs to poke at the running app.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub catalog: Arc<StubCatalog>,
}

/// Build the full application router with all middleware layers, backed by
/// the given catalog double and a fresh in-memory store.
pub fn build_test_app(catalog: StubCatalog) -> TestApp {
    let config = test_config();
    let store = Arc::new(MemoryStore::new());
    let catalog = Arc::new(catalog);

    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: catalog.clone(),
        trends: TrendStore::new(store.clone()),
        ws_manager: Arc::new(WsManager::new()),
    };

    TestApp {
        router: build_app_router(state.clone(), &config),
        state,
        store,
        catalog,
    }
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn expect_status(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

/// Poll `check` until it holds or a second passes.
pub async fn eventually<F, Fut>(mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..50 {
        if check().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}
