mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{build_test_app, StubCatalog, ALLOWED_ORIGIN};
use tower::ServiceExt;

fn cross_origin(method: Method, origin: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/api/v1/trending")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn configured_origin_may_read_without_credentials() {
    let app = build_test_app(StubCatalog::default());

    let response = app
        .router
        .clone()
        .oneshot(cross_origin(Method::GET, ALLOWED_ORIGIN))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        ALLOWED_ORIGIN
    );
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
        .is_none());
}

#[tokio::test]
async fn preflight_does_not_allow_authorization_header() {
    let app = build_test_app(StubCatalog::default());

    let response = app
        .router
        .clone()
        .oneshot(cross_origin(Method::OPTIONS, ALLOWED_ORIGIN))
        .await
        .unwrap();

    let allowed_headers = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .map(|v| v.to_str().unwrap().to_ascii_lowercase())
        .unwrap_or_default();
    assert!(!allowed_headers.contains("authorization"));
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
        .is_none());
}

#[tokio::test]
async fn other_origins_get_no_cors_headers() {
    let app = build_test_app(StubCatalog::default());

    let response = app
        .router
        .clone()
        .oneshot(cross_origin(Method::GET, "https://elsewhere.test"))
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
