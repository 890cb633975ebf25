//! Shared helpers for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` via
//! [`ecosort_api::router::build_app_router`] so tests exercise the same
//! middleware stack (CORS, request ID, timeout, tracing, panic recovery)
//! that production uses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use ecosort_api::config::{AdapterConfig, ServerConfig};
use ecosort_api::router::build_app_router;
use ecosort_api::state::AppState;
use ecosort_geocode::Geocoder;
use ecosort_vision::{BinDetector, WasteClassifier};

/// Build a test `ServerConfig` with safe defaults and the given adapter
/// endpoints.
pub fn test_config(adapters: AdapterConfig) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        adapters,
    }
}

/// Adapter endpoints that refuse connections immediately. Tests that
/// never reach an adapter (or that assert upstream-failure behaviour)
/// use these.
pub fn unreachable_adapters() -> AdapterConfig {
    AdapterConfig {
        geocoder_url: "http://127.0.0.1:1".to_string(),
        bin_detector_url: "http://127.0.0.1:1/detect".to_string(),
        classifier_url: "http://127.0.0.1:1/classify".to_string(),
        http_timeout_secs: 2,
    }
}

/// Build the full application router against the given pool with
/// unreachable adapters.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, unreachable_adapters())
}

/// Build the full application router against the given pool and adapter
/// endpoints (used by tests that run a stub inference server).
pub fn build_test_app_with(pool: PgPool, adapters: AdapterConfig) -> Router {
    let config = test_config(adapters);

    let state = AppState {
        pool,
        geocoder: Arc::new(Geocoder::new(config.adapters.geocoder_url.clone())),
        bin_detector: Arc::new(BinDetector::new(config.adapters.bin_detector_url.clone())),
        classifier: Arc::new(WasteClassifier::new(config.adapters.classifier_url.clone())),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response status and return the parsed body.
pub async fn expect_status(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
