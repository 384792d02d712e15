mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use common::StubProber;
use qr_link_validator::routes::app_router;
use std::sync::Arc;
use tower::ServiceExt;

fn app(prober: Arc<StubProber>) -> tower_http::normalize_path::NormalizePath<axum::Router> {
    app_router(common::create_test_state(prober))
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = app(Arc::new(StubProber::always(200)))
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://scanner.example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = app(Arc::new(StubProber::always(200)))
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/validate")
                .header(header::ORIGIN, "https://scanner.example.org")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
    );
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let prober = Arc::new(StubProber::always(200));
    let response = app(prober.clone())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/validate/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"url": "https://1drv.ms/x/abc"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(prober.call_count(), 1);
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app(Arc::new(StubProber::always(200)))
        .oneshot(
            Request::builder()
                .uri("/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
