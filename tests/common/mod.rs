//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use calc_service::config::ServiceConfig;
use calc_service::http::HttpServer;
use calc_service::lifecycle::Shutdown;
use serde_json::Value;
use tower::ServiceExt;

/// Config for a test server bound to `addr`.
#[allow(dead_code)]
pub fn test_config(addr: SocketAddr) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();
    config.observability.metrics_enabled = false;
    config
}

/// Start a real server on `addr` and wait until it accepts connections.
#[allow(dead_code)]
pub async fn start_server(config: ServiceConfig) -> Shutdown {
    let addr: SocketAddr = config.listener.bind_address.parse().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let server = HttpServer::new(config);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

/// In-process router with default settings.
#[allow(dead_code)]
pub fn router() -> Router {
    HttpServer::new(ServiceConfig::default()).router()
}

/// Send one request through `router` and decode the JSON body.
#[allow(dead_code)]
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[allow(dead_code)]
pub async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router(), request).await
}

#[allow(dead_code)]
pub async fn post(uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router(), request).await
}
