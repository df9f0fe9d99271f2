use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use doable_api::config::ServerConfig;
use doable_api::router::build_app_router;
use doable_api::state::AppState;
use doable_core::service::TodoService;
use doable_db::StoreBackend;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Sql,
    }
}

/// Build the full application router with all middleware layers on the
/// given pool and storage backend.
///
/// This goes through `build_app_router` so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with(pool: PgPool, backend: StoreBackend) -> Router {
    let mut config = test_config();
    config.store_backend = backend;

    let store = backend.into_store(pool.clone());
    let state = AppState {
        pool,
        todos: TodoService::new(store),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Build the test app on the default (raw SQL) backend.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, StoreBackend::Sql)
}

/// Send a GET request and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

/// Send a DELETE request and return the raw response.
pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

/// Send a PUT request with a JSON body and return the raw response.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
