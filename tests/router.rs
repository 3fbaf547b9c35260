use std::net::SocketAddr;

use axum::body::{Body, to_bytes};
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use domain_search::routes::app_router;
use serde_json::Value;
use tower::ServiceExt;

mod common;

fn request(uri: &str) -> Request<Body> {
    let peer: SocketAddr = "127.0.0.1:40000".parse().unwrap();

    Request::builder()
        .uri(uri)
        .extension(ConnectInfo(peer))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_full_router_search() {
    let app = app_router(common::create_test_state(0));

    let response = app
        .oneshot(request("/api/domains/search?q=example&tlds=.com,.dev"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["normalizedQuery"], "example");
    assert_eq!(json["primaryResults"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_full_router_trims_trailing_slash() {
    let app = app_router(common::create_test_state(0));

    let response = app.oneshot(request("/api/domains/tlds/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_full_router_health() {
    let app = app_router(common::create_test_state(0));

    let response = app.oneshot(request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_full_router_unknown_route() {
    let app = app_router(common::create_test_state(0));

    let response = app.oneshot(request("/api/unknown")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
