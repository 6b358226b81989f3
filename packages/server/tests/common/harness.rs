//! Test harness driving the router in-process with a mock taste provider.

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use server_core::kernel::{MockTasteProvider, TestDependencies};
use server_core::server::build_app;

pub struct TestHarness {
    pub app: Router,
    pub provider: MockTasteProvider,
}

impl TestHarness {
    pub fn new(provider: MockTasteProvider) -> Self {
        Self::with_origins(provider, &[])
    }

    pub fn with_origins(provider: MockTasteProvider, origins: &[String]) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = TestDependencies::with_provider(provider.clone()).into_server_deps();
        Self {
            app: build_app(deps, origins),
            provider,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
        send(&self.app, request).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        post_json(&self.app, path, body).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::get(path).body(Body::empty()).expect("valid request");
        let (status, _, body) = self.send(request).await;
        (status, body)
    }
}

/// Run one request through `app` and decode the JSON body (`Null` if none).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

pub async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    let (status, _, body) = send(app, request).await;
    (status, body)
}
