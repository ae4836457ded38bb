//! HTTP-level integration tests for `/api/bloqs`.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, delete, get, post_json, put_json, BLOQ_1};
use serde_json::json;

#[tokio::test]
async fn list_bloqs() {
    let (app, _) = common::seeded_app().await;
    let response = get(app, "/api/bloqs").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            {"id": "F1", "title": "Bloq 1", "address": "Loc 1"},
            {"id": "F2", "title": "Bloq 2", "address": "Loc 2"},
        ])
    );
}

#[tokio::test]
async fn get_bloq_by_id() {
    let (app, _) = common::seeded_app().await;
    let response = get(app, &format!("/api/bloqs/{BLOQ_1}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Bloq 1");
}

#[tokio::test]
async fn get_missing_bloq_returns_404() {
    let (app, _) = common::seeded_app().await;
    let response = get(app, "/api/bloqs/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Bloq not found"}));
}

#[tokio::test]
async fn create_then_get_bloq() {
    let (app, store) = common::seeded_app().await;
    let response = post_json(
        app,
        "/api/bloqs",
        json!({"title": "Bloq 3", "address": "Loc 3"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "Bloq 3");

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/bloqs/{id}")).await;
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn create_bloq_with_wrong_type_returns_400() {
    let (app, _) = common::seeded_app().await;
    let response = post_json(app, "/api/bloqs", json!({"title": 42, "address": "Loc"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": {
            "code": "invalid_type",
            "expected": "string",
            "received": "number",
            "message": "Expected string, received number",
            "path": ["title"],
        }})
    );
}

#[tokio::test]
async fn update_bloq_merges_fields() {
    let (app, _) = common::seeded_app().await;
    let response = put_json(app, "/api/bloqs/F1", json!({"address": "New Loc"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": "F1", "title": "Bloq 1", "address": "New Loc"})
    );
}

#[tokio::test]
async fn update_bloq_with_empty_patch_is_a_no_op() {
    let (app, _) = common::seeded_app().await;
    let response = put_json(app, "/api/bloqs/F1", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": "F1", "title": "Bloq 1", "address": "Loc 1"})
    );
}

#[tokio::test]
async fn update_missing_bloq_returns_404() {
    let (app, _) = common::seeded_app().await;
    let response = put_json(app, "/api/bloqs/999", json!({"title": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_bloq_returns_204_then_404() {
    let (app, store) = common::seeded_app().await;
    let response = delete(app, "/api/bloqs/F2").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(store);
    let response = get(app, "/api/bloqs/F2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bloq_lockers() {
    let (app, store) = common::seeded_app().await;
    let response = get(app, "/api/bloqs/F1/lockers").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["L1", "L2"]);

    let app = common::build_test_app(store);
    let response = get(app, "/api/bloqs/F9/lockers").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Bloq not found"}));
}

#[tokio::test]
async fn bloq_without_lockers_returns_empty_array() {
    let (app, store) = common::seeded_app().await;
    let created = body_json(
        post_json(app, "/api/bloqs", json!({"title": "Empty", "address": "Nowhere"})).await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/bloqs/{id}/lockers")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
