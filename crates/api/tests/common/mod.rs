#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use bloqit_db::{Collection, CollectionStore, MemoryStore};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use bloqit_api::config::ServerConfig;
use bloqit_api::router::build_app_router;
use bloqit_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        data_dir: PathBuf::from("unused"),
        json_logs: false,
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Arc<dyn CollectionStore>) -> Router {
    let config = test_config();
    let state = AppState { store };
    build_app_router(state, &config)
}

pub const BLOQ_1: &str = "F1";
pub const BLOQ_2: &str = "F2";
pub const LOCKER_1: &str = "L1";
pub const LOCKER_2: &str = "L2";
pub const LOCKER_3: &str = "L3";

/// In-memory store with two bloqs, three lockers (L1, L2 in F1; L3 in F2)
/// and two rents on L1.
pub async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .save(
            Collection::Facilities,
            vec![
                json!({"id": BLOQ_1, "title": "Bloq 1", "address": "Loc 1"}),
                json!({"id": BLOQ_2, "title": "Bloq 2", "address": "Loc 2"}),
            ],
        )
        .await
        .unwrap();
    store
        .save(
            Collection::Lockers,
            vec![
                json!({"id": LOCKER_1, "facilityId": BLOQ_1, "status": "OPEN", "isOccupied": false}),
                json!({"id": LOCKER_2, "facilityId": BLOQ_1, "status": "OPEN", "isOccupied": false}),
                json!({"id": LOCKER_3, "facilityId": BLOQ_2, "status": "CLOSED", "isOccupied": false}),
            ],
        )
        .await
        .unwrap();
    store
        .save(
            Collection::Rents,
            vec![
                json!({"id": "1", "lockerId": LOCKER_1, "weight": 10.0, "size": "M",
                       "status": "CREATED", "createdAt": "2024-05-01T10:00:00Z"}),
                json!({"id": "2", "lockerId": LOCKER_1, "weight": 5.0, "size": "S",
                       "status": "DELIVERED", "createdAt": "2024-05-02T10:00:00Z"}),
            ],
        )
        .await
        .unwrap();
    store
}

/// Router over a freshly seeded store, plus the store for inspection.
pub async fn seeded_app() -> (Router, Arc<MemoryStore>) {
    let store = seeded_store().await;
    (build_test_app(store.clone()), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
