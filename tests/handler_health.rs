mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::StubProber;
use qr_link_validator::api::handlers::{health_handler, home_handler};
use std::sync::Arc;

fn test_server() -> TestServer {
    let state = common::create_test_state(Arc::new(StubProber::always(200)));
    let app = Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].as_f64().unwrap() > 1_600_000_000.0);
}

#[tokio::test]
async fn test_home_endpoint_structure() {
    let server = test_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "online");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["message"].as_str().unwrap().contains("OneDrive/SharePoint"));
}
