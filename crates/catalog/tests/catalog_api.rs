//! Integration tests for `CatalogApi` against a local stub catalog.
//!
//! Each test binds an axum router on an ephemeral port that mimics the
//! search/discover endpoints, then drives the real reqwest client at it.

use std::collections::HashMap;
use std::net::SocketAddr;

use assert_matches::assert_matches;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cinetrend_catalog::{CatalogApi, MovieCatalog};
use cinetrend_core::error::FetchError;
use serde_json::json;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stub that echoes which endpoint and query it saw as the single result title.
fn echo_catalog() -> Router {
    async fn search(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> impl IntoResponse {
        if headers.get("authorization").map(|v| v.to_str().unwrap()) != Some("Bearer token") {
            return (StatusCode::UNAUTHORIZED, Json(json!({"status_message": "nope"})));
        }
        let query = params.get("query").cloned().unwrap_or_default();
        (
            StatusCode::OK,
            Json(json!({
                "results": [{"id": 1, "title": format!("search:{query}"), "poster_path": "/x.jpg"}]
            })),
        )
    }

    async fn discover(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        let sort = params.get("sort_by").cloned().unwrap_or_default();
        Json(json!({"results": [{"id": 2, "title": format!("discover:{sort}")}]}))
    }

    Router::new()
        .route("/search/movie", get(search))
        .route("/discover/movie", get(discover))
}

#[tokio::test]
async fn empty_query_hits_discover_endpoint() {
    let base = serve(echo_catalog()).await;
    let catalog = CatalogApi::new(base, Some("token".into()));

    let movies = catalog.search("").await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "discover:popularity.desc");
}

#[tokio::test]
async fn query_hits_search_endpoint_with_query() {
    let base = serve(echo_catalog()).await;
    let catalog = CatalogApi::new(base, Some("token".into()));

    let movies = catalog.search("batman").await.unwrap();

    assert_eq!(movies[0].title, "search:batman");
    assert_eq!(movies[0].poster_path.as_deref(), Some("/x.jpg"));
}

#[tokio::test]
async fn query_with_reserved_characters_round_trips() {
    let base = serve(echo_catalog()).await;
    let catalog = CatalogApi::new(base, Some("token".into()));

    let movies = catalog.search("fast & furious #7").await.unwrap();

    assert_eq!(movies[0].title, "search:fast & furious #7");
}

#[tokio::test]
async fn missing_token_fails_with_http_error() {
    let base = serve(echo_catalog()).await;
    let catalog = CatalogApi::new(base, None);

    let result = catalog.search("batman").await;

    assert_matches!(result, Err(FetchError::Http { status: 401 }));
}

#[tokio::test]
async fn server_error_is_http_error_not_body() {
    let app = Router::new().route(
        "/search/movie",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let base = serve(app).await;
    let catalog = CatalogApi::new(base, Some("token".into()));

    let err = catalog.search("dune").await.unwrap_err();

    assert_eq!(err, FetchError::Http { status: 500 });
    assert_eq!(err.user_message(), cinetrend_core::error::GENERIC_FETCH_ERROR);
}

#[tokio::test]
async fn failure_flag_in_body_is_api_error() {
    let app = Router::new().route(
        "/search/movie",
        get(|| async { Json(json!({"Response": "False", "Error": "Invalid API key"})) }),
    );
    let base = serve(app).await;
    let catalog = CatalogApi::new(base, Some("token".into()));

    let err = catalog.search("dune").await.unwrap_err();

    assert_eq!(err, FetchError::Api("Invalid API key".into()));
    assert_eq!(err.user_message(), "Invalid API key");
}

#[tokio::test]
async fn absent_results_field_is_empty_list() {
    let app = Router::new().route(
        "/search/movie",
        get(|| async { Json(json!({"page": 1, "total_results": 0})) }),
    );
    let base = serve(app).await;
    let catalog = CatalogApi::new(base, Some("token".into()));

    assert!(catalog.search("zzzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_catalog_is_network_error() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let catalog = CatalogApi::new(format!("http://{addr}"), Some("token".into()));

    assert_matches!(catalog.search("dune").await, Err(FetchError::Network(_)));
}
