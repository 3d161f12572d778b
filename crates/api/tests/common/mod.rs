#![allow(dead_code)]

use std::sync::Arc;

use aethera_api::config::ServerConfig;
use aethera_api::router::build_app_router;
use aethera_api::state::AppState;
use aethera_chain::ChainConfig;
use aethera_db::Store;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and no chain delays.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        chain: ChainConfig::instant(),
    }
}

/// A store over a fresh, migrated in-memory database holding the seed data.
pub async fn test_store() -> Arc<Store> {
    let pool = aethera_db::create_memory_pool().await.unwrap();
    aethera_db::run_migrations(&pool).await.unwrap();
    Arc::new(Store::open(pool).await.unwrap())
}

/// Build the full application router over `store`, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<Store>) -> Router {
    let config = test_config();
    build_app_router(AppState::new(store, config.chain.clone()), &config)
}

/// Router over a freshly seeded store.
pub async fn seeded_app() -> Router {
    build_test_app(test_store().await)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in through the API and return the user object.
pub async fn login(app: &Router, email: &str, role: &str) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "email": email, "role": role }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK, "login as {email} failed");
    body_json(response).await["data"].clone()
}

pub async fn login_admin(app: &Router) -> serde_json::Value {
    login(app, "admin@aethera.com", "ADMIN").await
}

pub async fn login_installer(app: &Router) -> serde_json::Value {
    login(app, "john@solarflow.com", "INSTALLER").await
}

pub async fn login_investor(app: &Router) -> serde_json::Value {
    login(app, "alice@capital.com", "INVESTOR").await
}
